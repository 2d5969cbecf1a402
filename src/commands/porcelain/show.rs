use crate::areas::repository::Repository;
use crate::artifacts::commit::Commit;
use crate::artifacts::errors::{CommetError, Result};
use crate::artifacts::fingerprint::{FINGERPRINT_LENGTH, Fingerprint};
use std::io::Write;

impl Repository {
    /// Show one commit and the files it recorded
    ///
    /// `revision` is a full hash or an unambiguous prefix of one.
    pub fn show(&self, revision: &str) -> Result<Commit> {
        self.ensure_initialized()?;

        let hash = self.resolve_commit(revision)?;
        let commit = self.commits().load(&hash)?;

        self.show_commit_medium(&commit)?;
        writeln!(self.writer())?;
        for file in commit.files() {
            writeln!(self.writer(), "    {}", file)?;
        }

        Ok(commit)
    }

    fn resolve_commit(&self, revision: &str) -> Result<Fingerprint> {
        let prefix = revision.to_ascii_lowercase();
        if prefix.is_empty()
            || prefix.len() > FINGERPRINT_LENGTH
            || !prefix.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(CommetError::InvalidRevision(revision.to_string()));
        }

        if let Some(hash) = Fingerprint::try_parse(&prefix) {
            return Ok(hash);
        }

        let mut candidates = self.commits().find_by_prefix(&prefix)?;
        match candidates.len() {
            0 => Err(CommetError::NotFound(revision.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(CommetError::AmbiguousRevision {
                rev: revision.to_string(),
                candidates: candidates.iter().map(|hash| hash.to_string()).collect(),
            }),
        }
    }
}
