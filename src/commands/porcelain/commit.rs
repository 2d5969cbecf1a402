use crate::areas::repository::Repository;
use crate::artifacts::commit::{Commit, commit_timestamp};
use crate::artifacts::errors::{CommetError, Result};
use std::io::Write;

impl Repository {
    /// Seal the staged files into a new commit and empty the staging area
    ///
    /// The staging lock is held for the whole transaction. The commit record
    /// is saved before the staging area is cleared, so a failure in between
    /// leaves the entries staged and the record intact.
    pub fn commit(&self, message: &str) -> Result<Commit> {
        self.ensure_initialized()?;

        let mut staging = self.staging().lock()?;
        let staged = staging.load()?;
        if staged.is_empty() {
            return Err(CommetError::NothingToCommit);
        }

        let commit = Commit::seal(message, commit_timestamp(), &staged);
        self.commits().save(&commit)?;
        staging.clear()?;
        drop(staging);

        writeln!(
            self.writer(),
            "[{}] {}",
            commit.short_hash(),
            commit.short_message()
        )?;

        Ok(commit)
    }
}
