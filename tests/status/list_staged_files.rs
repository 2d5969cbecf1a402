use crate::common::{self, init_repository_dir, repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn status_without_staged_files(init_repository_dir: TempDir) {
    common::run_commet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("No changes staged.\n"));
}

#[rstest]
fn status_lists_staged_files_in_order(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for path in ["a/2.txt", "1.txt"] {
        common::run_commet_command(dir, &["add", path])
            .assert()
            .success();
    }

    common::run_commet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("Changes staged:\n- a/2.txt\n- 1.txt\n"));
}

#[rstest]
fn status_lists_duplicates(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for _ in 0..2 {
        common::run_commet_command(dir, &["add", "1.txt"])
            .assert()
            .success();
    }

    common::run_commet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("Changes staged:\n- 1.txt\n- 1.txt\n"));
}

#[rstest]
fn status_in_uninitialized_directory_fails(repository_dir: TempDir) {
    common::run_commet_command(repository_dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a commet repository"));
}
