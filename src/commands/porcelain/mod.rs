//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block that performs one transaction
//! over the staging area and the commit log, writes its report to the
//! repository writer and returns what it did.
//!
//! ## Commands
//!
//! - `init`: Create the control directory
//! - `add`: Stage one file
//! - `commit`: Seal the staged files into a commit
//! - `status`: List staged files
//! - `log`: List commits, newest first
//! - `show`: Show one commit and its files

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
pub mod status;
