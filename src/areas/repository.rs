use crate::areas::commits::CommitStore;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::errors::{CommetError, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub const CONTROL_DIR: &str = ".commet";
pub const COMMITS_DIR: &str = "commits";

/// A repository rooted at a working directory
///
/// The repository is initialized when `<root>/.commet` exists. Command output
/// goes to the writer handed to [`Repository::new`].
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: StagingArea,
    commits: CommitStore,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(|e| CommetError::write(path, e))?;
        }
        let path = path.canonicalize().map_err(|e| CommetError::file(path, e))?;

        let control_path = path.join(CONTROL_DIR);
        let staging = StagingArea::new(&control_path);
        let commits = CommitStore::new(control_path.join(COMMITS_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path(), CONTROL_DIR);

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging,
            commits,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> Box<Path> {
        self.path.join(CONTROL_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.control_path().is_dir()
    }

    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(CommetError::NotInitialized(self.path.to_path_buf()))
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    pub fn commits(&self) -> &CommitStore {
        &self.commits
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
