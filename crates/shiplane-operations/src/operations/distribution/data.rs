use std::path::PathBuf;

use shiplane_core::UploadType;
use shiplane_git::{CommitInfo, PushInfo, TagInfo};

use crate::Parameters;
use crate::traits::BuildArtifact;

/// What the git step published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitPublishResult {
    pub commit: CommitInfo,
    pub tag: Option<TagInfo>,
    pub push: PushInfo,
}

/// Value passed from step to step through a distribution lane.
#[derive(Debug, Clone)]
pub struct DistributionData {
    pub parameters: Parameters,
    pub artifact: Option<BuildArtifact>,
    pub upload: Option<UploadType>,
    pub git: Option<GitPublishResult>,
    pub symbols_uploaded: Vec<PathBuf>,
}

impl DistributionData {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            artifact: None,
            upload: None,
            git: None,
            symbols_uploaded: Vec::new(),
        }
    }
}
