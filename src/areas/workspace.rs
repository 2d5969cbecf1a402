use crate::artifacts::errors::{CommetError, Result};
use crate::artifacts::fingerprint::Fingerprint;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    control_dir: &'static str,
}

impl Workspace {
    pub fn new(path: Box<Path>, control_dir: &'static str) -> Self {
        Workspace { path, control_dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a user supplied path to its `/`-separated form relative to the root
    ///
    /// Relative paths are taken relative to the workspace root. The file must
    /// exist and lie inside the work tree, outside the control directory.
    pub fn relative_path(&self, file_path: &Path) -> Result<String> {
        let joined = if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        };
        let absolute = joined
            .canonicalize()
            .map_err(|e| CommetError::file(file_path, e))?;

        let relative = absolute
            .strip_prefix(&self.path)
            .map_err(|_| CommetError::OutsideWorkTree(file_path.to_path_buf()))?;

        let components = relative
            .components()
            .map(|component| match component {
                Component::Normal(part) => Ok(part.to_string_lossy().into_owned()),
                _ => Err(CommetError::OutsideWorkTree(file_path.to_path_buf())),
            })
            .collect::<Result<Vec<_>>>()?;

        match components.first() {
            None => Err(CommetError::OutsideWorkTree(file_path.to_path_buf())),
            Some(first) if first == self.control_dir => {
                Err(CommetError::OutsideWorkTree(file_path.to_path_buf()))
            }
            Some(_) => Ok(components.join("/")),
        }
    }

    pub fn absolute_path(&self, relative_path: &str) -> PathBuf {
        self.path.join(relative_path)
    }

    /// Fingerprint the full content of a file
    pub fn hash_file(&self, file_path: &Path) -> Result<Fingerprint> {
        let mut file = std::fs::File::open(file_path).map_err(|e| CommetError::file(file_path, e))?;

        Fingerprint::of_reader(&mut file).map_err(|e| CommetError::file(file_path, e))
    }
}
