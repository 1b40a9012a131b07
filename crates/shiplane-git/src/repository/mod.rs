mod branch;
mod commit;
mod remote;
mod staging;
mod tag;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

/// A non-bare repository discovered from a path inside its work tree.
pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`, searching parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if no repository is found or the
    /// repository is bare.
    pub fn open(path: &Path) -> Result<Self> {
        let not_a_repository = || GitError::NotARepository {
            path: path.to_path_buf(),
        };

        let inner = git2::Repository::discover(path).map_err(|_| not_a_repository())?;
        let workdir = inner.workdir().ok_or_else(not_a_repository)?;

        // `dunce` strips the \\?\ prefix libgit2 reports on Windows.
        let root = dunce::simplified(workdir).to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
