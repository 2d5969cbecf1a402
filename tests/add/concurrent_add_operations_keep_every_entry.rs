use crate::common;
use crate::common::file::{file_name, write_generated_files};
use pretty_assertions::assert_eq;

// Every process reads, appends and rewrites the staged file. Without the
// staging lock, two of them reading the same state would drop an entry.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_add_operations_keep_every_entry() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    common::run_commet_command(dir.path(), &["init"])
        .assert()
        .success();

    let names = write_generated_files(dir.path(), 8)
        .iter()
        .map(file_name)
        .collect::<Vec<_>>();

    let tasks = names
        .iter()
        .cloned()
        .map(|name| {
            let dir_path = dir.path().to_path_buf();
            tokio::task::spawn_blocking(move || {
                common::run_commet_command(&dir_path, &["add", &name])
                    .assert()
                    .success();
            })
        })
        .collect::<Vec<_>>();

    for task in tasks {
        task.await?;
    }

    let content = std::fs::read(common::staged_file(dir.path()))?;
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&content)?;
    let mut staged = entries
        .iter()
        .map(|entry| entry["path"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    staged.sort();

    let mut expected = names;
    expected.sort();
    assert_eq!(staged, expected);

    Ok(())
}
