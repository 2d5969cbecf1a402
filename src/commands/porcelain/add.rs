use crate::areas::repository::Repository;
use crate::artifacts::errors::Result;
use crate::artifacts::staged_entry::StagedEntry;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stage one file
    ///
    /// Adding a path that is already staged appends another entry; the commit
    /// snapshot keeps the latest content for each path.
    pub fn add(&self, file_path: &Path) -> Result<StagedEntry> {
        self.ensure_initialized()?;

        let relative_path = self.workspace().relative_path(file_path)?;
        let content_hash = self
            .workspace()
            .hash_file(&self.workspace().absolute_path(&relative_path))?;

        let entry = StagedEntry::new(relative_path, content_hash);
        self.staging().append(entry.clone())?;

        writeln!(self.writer(), "Added {} to staging area", entry.path)?;

        Ok(entry)
    }
}
