use std::path::Path;

use tracing::info;

use super::command::run_tool_streaming;
use crate::traits::DependencyManager;
use crate::{OperationError, Result};

/// Installs pods with the `pod` command line tool.
#[derive(Debug, Clone)]
pub struct CocoaPodsProvider {
    program: String,
}

impl CocoaPodsProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "pod".to_string(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for CocoaPodsProvider {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn install_args(repo_update: bool) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if repo_update {
        args.push("--repo-update".to_string());
    }
    args
}

impl DependencyManager for CocoaPodsProvider {
    fn install(&self, project_root: &Path, repo_update: bool) -> Result<()> {
        info!(repo_update, "installing pods");
        run_tool_streaming(project_root, &self.program, &install_args(repo_update)).map_err(
            |err| match err {
                OperationError::CommandFailed { stderr, .. } => {
                    OperationError::DependencyUpdate { message: stderr }
                }
                OperationError::CommandSpawn { command, source } => {
                    OperationError::DependencyUpdate {
                        message: format!("{command}: {source}"),
                    }
                }
                other => other,
            },
        )
    }
}
