//! Data structures of the staging-and-commit model
//!
//! - `commit`: Immutable commit records and their identity
//! - `errors`: Error type shared by every operation
//! - `fingerprint`: SHA-1 content fingerprints
//! - `staged_entry`: One file queued for the next commit

pub mod commit;
pub mod errors;
pub mod fingerprint;
pub mod staged_entry;
