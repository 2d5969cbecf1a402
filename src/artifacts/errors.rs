//! Error types surfaced by the repository core
//!
//! Every failure of a core operation is returned as a [`CommetError`]. The CLI
//! shell renders the message and picks the exit code.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommetError>;

#[derive(Debug, Error)]
pub enum CommetError {
    #[error("repository already initialized in {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("not a commet repository: {} (run `commet init` first)", .0.display())]
    NotInitialized(PathBuf),

    #[error("unable to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path {} is outside the repository work tree", .0.display())]
    OutsideWorkTree(PathBuf),

    #[error("corrupt repository state in {}: {source}", .path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no changes to commit")]
    NothingToCommit,

    #[error("commit not found: {0}")]
    NotFound(String),

    #[error("invalid revision: {0}")]
    InvalidRevision(String),

    #[error("ambiguous revision {rev}, candidates: {}", .candidates.join(", "))]
    AmbiguousRevision {
        rev: String,
        candidates: Vec<String>,
    },

    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CommetError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CommetError::File {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CommetError::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CommetError::CorruptState {
            path: path.into(),
            source,
        }
    }
}
