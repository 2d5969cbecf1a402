use crate::areas::repository::Repository;
use crate::artifacts::errors::{CommetError, Result};
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&self) -> Result<()> {
        let control_path = self.control_path();

        // create_dir fails on an existing directory, so two racing inits
        // cannot both succeed
        match fs::create_dir(&control_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(CommetError::AlreadyInitialized(self.path().to_path_buf()));
            }
            Err(e) => return Err(CommetError::write(&*control_path, e)),
        }

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
