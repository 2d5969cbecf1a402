//! commet: a minimal local version-control engine
//!
//! Files are fingerprinted into a staging area and sealed into immutable
//! commit records addressed by their hash. Everything lives under a `.commet`
//! control directory at the repository root.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod logging;

pub use areas::repository::Repository;
pub use artifacts::errors::{CommetError, Result};
