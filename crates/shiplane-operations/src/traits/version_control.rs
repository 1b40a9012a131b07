use std::path::Path;

use crate::Result;

/// Reads and writes the marketing version and build number stored in the
/// app project.
pub trait VersionControl: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the version cannot be read from the project.
    fn version_number(&self, project_root: &Path, project: &str, target: &str) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the build number cannot be read from the project.
    fn build_number(&self, project_root: &Path, project: &str) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the project cannot be updated.
    fn set_version_number(&self, project_root: &Path, project: &str, version: &str)
    -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the project cannot be updated.
    fn set_build_number(&self, project_root: &Path, project: &str, build_number: &str)
    -> Result<()>;
}
