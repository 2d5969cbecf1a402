use crate::common::{self, repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_twice_fails(repository_dir: TempDir) {
    common::run_commet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    common::run_commet_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    assert!(common::control_dir(repository_dir.path()).is_dir());
}
