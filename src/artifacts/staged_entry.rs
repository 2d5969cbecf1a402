use crate::artifacts::fingerprint::Fingerprint;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One file queued for the next commit
///
/// `path` is relative to the repository root and always uses `/` separators,
/// so the staged file reads the same on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StagedEntry {
    pub path: String,
    #[serde(rename = "hash")]
    pub content_hash: Fingerprint,
}
