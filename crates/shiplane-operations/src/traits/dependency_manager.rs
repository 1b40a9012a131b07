use std::path::Path;

use crate::Result;

pub trait DependencyManager: Send + Sync {
    /// Install the project's third-party dependencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the dependency manager reports a failure.
    fn install(&self, project_root: &Path, repo_update: bool) -> Result<()>;
}
