use crate::{CommitInfo, GitError, Result};

use super::Repository;

impl Repository {
    /// Commit the staged changes on top of HEAD.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NothingToCommit`] if the index matches HEAD, or an
    /// error if no signature is configured or the commit cannot be written.
    pub fn commit(&self, message: &str) -> Result<CommitInfo> {
        let tree = self.inner.find_tree(self.inner.index()?.write_tree()?)?;
        let parent = self.inner.head().ok().and_then(|head| head.peel_to_commit().ok());

        if parent.as_ref().is_some_and(|p| p.tree_id() == tree.id()) {
            return Err(GitError::NothingToCommit);
        }

        let author = self.inner.signature()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = self
            .inner
            .commit(Some("HEAD"), &author, &author, message, &tree, &parents)?;

        Ok(CommitInfo {
            sha: oid.to_string(),
            message: message.to_string(),
        })
    }
}
