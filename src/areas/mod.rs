//! Core repository components
//!
//! - `commits`: Commit log, one JSON record per commit hash
//! - `repository`: Repository state and coordination of the other areas
//! - `staging`: Staging area persisted as an ordered list of staged entries
//! - `workspace`: Working tree path resolution and content hashing

pub mod commits;
pub mod repository;
pub mod staging;
pub mod workspace;

use crate::artifacts::errors::{CommetError, Result};
use fake::rand;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `content` in one step
///
/// The content goes to a temp file next to `path` which is then renamed over
/// it, so readers see either the old or the new file, never a partial one.
pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| CommetError::write(path, std::io::ErrorKind::InvalidInput.into()))?;
    let temp_path = dir.join(generate_temp_name());

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| CommetError::write(&temp_path, e))?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| CommetError::write(&temp_path, e))?;
    drop(file);

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(CommetError::write(path, e));
    }

    Ok(())
}

pub(crate) const TEMP_PREFIX: &str = "tmp-";

fn generate_temp_name() -> String {
    format!("{}{}-{}", TEMP_PREFIX, std::process::id(), rand::random::<u32>())
}
