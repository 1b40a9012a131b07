use std::path::{Path, PathBuf};

use shiplane_core::BuildConfiguration;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest<'a> {
    pub scheme: &'a str,
    pub output_directory: &'a Path,
    pub configuration: BuildConfiguration,
    pub extra_flags: &'a [&'a str],
}

/// The archive produced by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub path: PathBuf,
}

pub trait AppBuilder: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the build or the export fails.
    fn build(&self, project_root: &Path, request: &BuildRequest<'_>) -> Result<BuildArtifact>;
}
