use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Short name of the checked-out branch, e.g. `master` or `feature/login`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::DetachedHead`] if HEAD is not on a local branch.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.inner.head()?;
        head.name()
            .and_then(|name| name.strip_prefix("refs/heads/"))
            .map(str::to_owned)
            .ok_or(GitError::DetachedHead)
    }
}
