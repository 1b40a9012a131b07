use std::path::Path;

use shiplane_git::{CommitInfo, PushInfo, TagInfo};

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, project_root: &Path) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if staging fails.
    fn stage_all(&self, project_root: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo>;

    /// # Errors
    ///
    /// Returns an error if the tag cannot be created or already exists.
    fn create_tag(&self, project_root: &Path, tag_name: &str, message: &str) -> Result<TagInfo>;

    /// Push the current branch and `tags` to `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the push fails or is rejected.
    fn push(&self, project_root: &Path, tags: &[&str]) -> Result<PushInfo>;
}
