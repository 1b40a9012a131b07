use std::path::Path;

use crate::Result;

/// Keeps the deployment toolchain itself current before a lane runs.
pub trait ToolUpdater: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the update cannot be checked or installed.
    fn update_tools(&self, project_root: &Path) -> Result<()>;
}
