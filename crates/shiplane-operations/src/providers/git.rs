use std::path::Path;

use shiplane_config::EnvSource;
use shiplane_git::{CommitInfo, PushInfo, Repository, TagInfo};
use tracing::debug;

use crate::Result;
use crate::traits::GitProvider;

/// CI variables holding the branch being built, checked in order.
///
/// CI checkouts are frequently on a detached HEAD, so the branch reported by
/// the CI system is preferred over the repository state.
pub const CI_BRANCH_VARIABLES: &[&str] = &[
    "GIT_BRANCH",
    "BRANCH_NAME",
    "CI_COMMIT_REF_NAME",
    "GITHUB_REF_NAME",
];

const REMOTE: &str = "origin";

#[derive(Debug, Clone, Default)]
pub struct Git2Provider {
    ci_branch: Option<String>,
}

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self { ci_branch: None }
    }

    /// A provider that reports the CI branch, when one is set.
    #[must_use]
    pub fn from_env(env: &impl EnvSource) -> Self {
        let ci_branch = CI_BRANCH_VARIABLES
            .iter()
            .find_map(|key| env.var(key).filter(|value| !value.is_empty()));
        Self { ci_branch }
    }
}

impl GitProvider for Git2Provider {
    fn current_branch(&self, project_root: &Path) -> Result<String> {
        if let Some(branch) = &self.ci_branch {
            debug!(branch = %branch, "using branch from CI environment");
            return Ok(branch.clone());
        }
        let repo = Repository::open(project_root)?;
        Ok(repo.current_branch()?)
    }

    fn stage_all(&self, project_root: &Path) -> Result<()> {
        let repo = Repository::open(project_root)?;
        let staged = repo.stage_all()?;
        debug!(staged, "staged changes");
        Ok(())
    }

    fn commit(&self, project_root: &Path, message: &str) -> Result<CommitInfo> {
        let repo = Repository::open(project_root)?;
        Ok(repo.commit(message)?)
    }

    fn create_tag(&self, project_root: &Path, tag_name: &str, message: &str) -> Result<TagInfo> {
        let repo = Repository::open(project_root)?;
        Ok(repo.create_tag(tag_name, message)?)
    }

    fn push(&self, project_root: &Path, tags: &[&str]) -> Result<PushInfo> {
        let repo = Repository::open(project_root)?;
        Ok(repo.push(REMOTE, tags)?)
    }
}
