use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDownload<'a> {
    pub apple_id: &'a str,
    pub app_identifier: &'a str,
    pub version: Option<&'a str>,
    pub min_version: Option<&'a str>,
}

/// Debug symbol handling for crash reporting.
pub trait SymbolService: Send + Sync {
    /// Download debug symbols from App Store Connect, returning the local
    /// paths. An empty list is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails.
    fn download(&self, project_root: &Path, request: &SymbolDownload<'_>) -> Result<Vec<PathBuf>>;

    /// # Errors
    ///
    /// Returns an error if the upload fails.
    fn upload(&self, project_root: &Path, dsym_path: &Path, service_info_path: &str)
    -> Result<()>;

    /// Remove the files left behind by [`SymbolService::download`].
    ///
    /// # Errors
    ///
    /// Returns an error if the files cannot be removed.
    fn clean_build_artifacts(&self, project_root: &Path) -> Result<()>;
}
