use crate::common::{self, init_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_staged_files_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for path in ["1.txt", "a/2.txt", "1.txt"] {
        common::run_commet_command(dir, &["add", path])
            .assert()
            .success();
    }

    let output = common::stdout_of(&mut common::commet_commit_at(
        dir,
        "Initial commit",
        "2023-01-01 12:00:00 +0000",
    ));

    let hashes = common::commit_hashes(dir);
    assert_eq!(hashes.len(), 1);
    let hash = &hashes[0];
    assert_eq!(output, format!("[{}] Initial commit\n", &hash[..7]));

    let record = common::read_commit(dir, hash);
    assert_eq!(record["hash"], hash.as_str());
    assert_eq!(record["message"], "Initial commit");
    assert_eq!(record["files"], serde_json::json!(["1.txt", "a/2.txt"]));
    assert!(record["timestamp"].as_str().unwrap().starts_with("2023-01-01T12:00:00"));

    assert!(!common::staged_file(dir).exists());
}

#[rstest]
fn commit_clears_staging_area(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    common::run_commet_command(dir, &["add", "1.txt"])
        .assert()
        .success();
    common::run_commet_command(dir, &["commit", "-m", "first"])
        .assert()
        .success();

    common::run_commet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("No changes staged.\n"));
}

#[rstest]
fn commit_hash_changes_with_staged_content(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let date = "2023-01-01 12:00:00 +0000";

    common::run_commet_command(dir, &["add", "1.txt"])
        .assert()
        .success();
    common::commet_commit_at(dir, "same", date).assert().success();

    std::fs::write(dir.join("1.txt"), "changed").unwrap();
    common::run_commet_command(dir, &["add", "1.txt"])
        .assert()
        .success();
    common::commet_commit_at(dir, "same", date).assert().success();

    assert_eq!(common::commit_hashes(dir).len(), 2);
}

#[rstest]
fn commit_requires_exactly_one_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    common::run_commet_command(dir, &["add", "1.txt"])
        .assert()
        .success();

    common::run_commet_command(dir, &["commit"]).assert().failure();
    common::run_commet_command(dir, &["commit", "one", "two"])
        .assert()
        .failure();

    assert!(common::commit_hashes(dir).is_empty());
    assert!(common::staged_file(dir).exists());
}
