use crate::areas::repository::Repository;
use crate::artifacts::errors::Result;
use crate::artifacts::staged_entry::StagedEntry;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// List the staged files in the order they were added
    pub fn status(&self) -> Result<Vec<StagedEntry>> {
        self.ensure_initialized()?;

        let staged = self.staging().load()?;

        if staged.is_empty() {
            writeln!(self.writer(), "No changes staged.")?;
        } else {
            writeln!(self.writer(), "Changes staged:")?;
            for entry in &staged {
                writeln!(self.writer(), "- {}", entry.path.green())?;
            }
        }

        Ok(staged)
    }
}
