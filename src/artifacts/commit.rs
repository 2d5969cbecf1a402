//! Commit records
//!
//! A commit seals a message, a timestamp and the set of staged paths under a
//! fingerprint. Records are stored as JSON, one file per commit:
//!
//! ```text
//! {
//!   "hash": "<40 hex chars>",
//!   "message": "<message>",
//!   "timestamp": "<RFC 3339>",
//!   "files": ["a.txt", "dir/b.txt"]
//! }
//! ```
//!
//! ## Identity
//!
//! The hash covers the message, the timestamp and the snapshot, so two commits
//! with the same message made at different instants or over different content
//! get different identifiers. The snapshot is the sorted list of
//! `(path, content hash)` pairs where the last staged entry for a path wins:
//!
//! ```text
//! timestamp <RFC 3339>
//! file <content hash> <path>
//! ...
//!
//! <message>
//! ```

use crate::artifacts::fingerprint::{Fingerprint, SHORT_FINGERPRINT_LENGTH};
use crate::artifacts::staged_entry::StagedEntry;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overrides the commit timestamp, like `GIT_COMMITTER_DATE` does for git
pub const COMMIT_DATE_ENV: &str = "COMMET_COMMIT_DATE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    hash: Fingerprint,
    message: String,
    timestamp: DateTime<FixedOffset>,
    files: Vec<String>,
}

impl Commit {
    /// Seal the staged entries into a new commit
    ///
    /// `files` keeps the distinct paths in the order they were first staged.
    pub fn seal(message: &str, timestamp: DateTime<FixedOffset>, staged: &[StagedEntry]) -> Self {
        let mut files = Vec::<String>::new();
        let mut snapshot = BTreeMap::<&str, &Fingerprint>::new();

        for entry in staged {
            if snapshot.insert(&entry.path, &entry.content_hash).is_none() {
                files.push(entry.path.clone());
            }
        }

        let mut content = format!("timestamp {}\n", Self::format_timestamp(&timestamp));
        for (path, content_hash) in &snapshot {
            content.push_str(&format!("file {content_hash} {path}\n"));
        }
        content.push('\n');
        content.push_str(message);

        Commit {
            hash: Fingerprint::of_bytes(content.as_bytes()),
            message: message.to_string(),
            timestamp,
            files,
        }
    }

    pub fn hash(&self) -> &Fingerprint {
        &self.hash
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn short_hash(&self) -> &str {
        &self.hash.as_ref()[..SHORT_FINGERPRINT_LENGTH]
    }

    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }
}

/// Timestamp for a new commit
///
/// Reads `COMMET_COMMIT_DATE` if set (RFC 3339, RFC 2822 or
/// `%Y-%m-%d %H:%M:%S %z`), otherwise uses the local clock.
pub fn commit_timestamp() -> DateTime<FixedOffset> {
    let from_env = std::env::var(COMMIT_DATE_ENV).ok().and_then(|date_str| {
        let parsed = parse_date(&date_str);
        if parsed.is_none() {
            tracing::warn!(value = %date_str, "ignoring unparsable {}", COMMIT_DATE_ENV);
        }
        parsed
    });

    from_env.unwrap_or_else(|| chrono::Local::now().fixed_offset())
}

fn parse_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date_str)
        .or_else(|_| DateTime::parse_from_rfc2822(date_str))
        .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
}
