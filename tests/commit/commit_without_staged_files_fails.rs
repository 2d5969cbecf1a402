use crate::common::{self, init_repository_dir, repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_without_staged_files_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    common::run_commet_command(dir, &["commit", "nothing here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no changes to commit"));

    assert!(common::commit_hashes(dir).is_empty());
}

#[rstest]
fn second_commit_without_new_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    common::run_commet_command(dir, &["add", "1.txt"])
        .assert()
        .success();
    common::run_commet_command(dir, &["commit", "first"])
        .assert()
        .success();

    common::run_commet_command(dir, &["commit", "second"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no changes to commit"));

    assert_eq!(common::commit_hashes(dir).len(), 1);
}

#[rstest]
fn commit_in_uninitialized_directory_fails(repository_dir: TempDir) {
    common::run_commet_command(repository_dir.path(), &["commit", "msg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a commet repository"));
}

#[rstest]
fn commit_with_corrupt_staging_fails_and_keeps_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(common::staged_file(dir), "{ broken").unwrap();

    common::run_commet_command(dir, &["commit", "msg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt repository state"));

    assert!(common::commit_hashes(dir).is_empty());
    assert_eq!(
        std::fs::read_to_string(common::staged_file(dir)).unwrap(),
        "{ broken"
    );
}
