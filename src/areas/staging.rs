//! Staging area
//!
//! The staging area is the ordered list of files queued for the next commit.
//! It lives in `.commet/staged.json` as a JSON array of `{path, hash}` records
//! and is absent when nothing is staged.
//!
//! ## Locking
//!
//! Every access goes through `.commet/staged.lock`: reads take a shared lock,
//! mutations an exclusive one. [`StagingArea::lock`] hands out the exclusive
//! lock as a guard so a caller can read, persist elsewhere and clear without
//! another process slipping an entry in between. The lock is released when
//! the guard is dropped.

use crate::areas::write_atomically;
use crate::artifacts::errors::{CommetError, Result};
use crate::artifacts::staged_entry::StagedEntry;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::path::Path;

pub const STAGED_FILE: &str = "staged.json";
pub const LOCK_FILE: &str = "staged.lock";

#[derive(Debug)]
pub struct StagingArea {
    /// Path to the staged file (typically `.commet/staged.json`)
    path: Box<Path>,
    lock_path: Box<Path>,
}

impl StagingArea {
    pub fn new(control_path: &Path) -> Self {
        StagingArea {
            path: control_path.join(STAGED_FILE).into_boxed_path(),
            lock_path: control_path.join(LOCK_FILE).into_boxed_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the staged entries
    ///
    /// Returns an empty list when nothing is staged.
    pub fn load(&self) -> Result<Vec<StagedEntry>> {
        let _guard = self.acquire(Lock::Shared)?;
        read_entries(&self.path)
    }

    /// Append one entry at the end, keeping any earlier entry for the same path
    pub fn append(&self, entry: StagedEntry) -> Result<()> {
        self.lock()?.append(entry)
    }

    /// Drop every staged entry; clearing an empty area is not an error
    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear()
    }

    /// Take the exclusive lock for a sequence of operations
    pub fn lock(&self) -> Result<StagingGuard<'_>> {
        let guard = self.acquire(Lock::Exclusive)?;

        Ok(StagingGuard {
            path: &self.path,
            _guard: guard,
        })
    }

    fn acquire(&self, lock: Lock) -> Result<FileGuard<Box<File>>> {
        let lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|e| CommetError::write(&*self.lock_path, e))?;

        file_guard::lock(Box::new(lock_file), lock, 0, 1)
            .map_err(|e| CommetError::write(&*self.lock_path, e))
    }
}

/// Exclusive access to the staging area, released on drop
pub struct StagingGuard<'s> {
    path: &'s Path,
    _guard: FileGuard<Box<File>>,
}

impl StagingGuard<'_> {
    pub fn load(&self) -> Result<Vec<StagedEntry>> {
        read_entries(self.path)
    }

    pub fn append(&mut self, entry: StagedEntry) -> Result<()> {
        let mut entries = read_entries(self.path)?;
        tracing::debug!(
            path = %entry.path,
            hash = %entry.content_hash,
            staged = entries.len() + 1,
            "appending staged entry"
        );
        entries.push(entry);

        let content =
            serde_json::to_vec_pretty(&entries).map_err(|e| CommetError::corrupt(self.path, e))?;
        write_atomically(self.path, &content)
    }

    pub fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "cleared staging area");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CommetError::write(self.path, e)),
        }
    }
}

fn read_entries(path: &Path) -> Result<Vec<StagedEntry>> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(CommetError::file(path, e)),
    };

    serde_json::from_slice(&content).map_err(|e| CommetError::corrupt(path, e))
}
