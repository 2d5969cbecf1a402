use crate::areas::{TEMP_PREFIX, write_atomically};
use crate::artifacts::commit::Commit;
use crate::artifacts::errors::{CommetError, Result};
use crate::artifacts::fingerprint::Fingerprint;
use std::path::{Path, PathBuf};

/// Commit log stored as `.commet/commits/<hash>`
#[derive(Debug)]
pub struct CommitStore {
    path: Box<Path>,
}

impl CommitStore {
    pub fn new(path: Box<Path>) -> Self {
        CommitStore { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    /// Persist a commit under its hash, replacing any record with the same hash
    pub fn save(&self, commit: &Commit) -> Result<()> {
        std::fs::create_dir_all(&self.path).map_err(|e| CommetError::write(&*self.path, e))?;

        let commit_path = self.commit_path(commit.hash());
        let content =
            serde_json::to_vec_pretty(commit).map_err(|e| CommetError::corrupt(&commit_path, e))?;
        write_atomically(&commit_path, &content)?;

        tracing::info!(hash = %commit.hash(), files = commit.files().len(), "saved commit");
        Ok(())
    }

    pub fn load(&self, hash: &Fingerprint) -> Result<Commit> {
        let commit_path = self.commit_path(hash);
        let content = match std::fs::read(&commit_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CommetError::NotFound(hash.to_string()));
            }
            Err(e) => return Err(CommetError::file(commit_path, e)),
        };

        serde_json::from_slice(&content).map_err(|e| CommetError::corrupt(commit_path, e))
    }

    /// Every stored commit, newest first
    pub fn list(&self) -> Result<Vec<Commit>> {
        let mut commits = self
            .stored_hashes()?
            .iter()
            .map(|hash| self.load(hash))
            .collect::<Result<Vec<_>>>()?;

        commits.sort_by(|a, b| {
            b.timestamp()
                .cmp(&a.timestamp())
                .then_with(|| a.hash().cmp(b.hash()))
        });

        Ok(commits)
    }

    /// Find all commits whose hash starts with the given prefix
    ///
    /// More than one match means the prefix is ambiguous.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Vec<Fingerprint>> {
        Ok(self
            .stored_hashes()?
            .into_iter()
            .filter(|hash| hash.as_ref().starts_with(prefix))
            .collect())
    }

    fn stored_hashes(&self) -> Result<Vec<Fingerprint>> {
        let entries = match std::fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CommetError::file(&*self.path, e)),
        };

        let mut hashes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CommetError::file(&*self.path, e))?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(TEMP_PREFIX) {
                continue;
            }

            match Fingerprint::try_parse(&file_name) {
                Some(hash) => hashes.push(hash),
                None => tracing::warn!(file = %file_name, "skipping unexpected file in commit log"),
            }
        }
        hashes.sort();

        Ok(hashes)
    }

    fn commit_path(&self, hash: &Fingerprint) -> PathBuf {
        self.path.join(hash.as_ref())
    }
}
