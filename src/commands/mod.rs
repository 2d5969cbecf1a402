//! Command implementations
//!
//! Only user-facing (porcelain) commands exist; the stores in `areas` play
//! the role of plumbing.

pub mod porcelain;
