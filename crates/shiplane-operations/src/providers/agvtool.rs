use std::path::{Path, PathBuf};

use tracing::debug;

use super::command::run_tool;
use crate::traits::VersionControl;
use crate::{OperationError, Result};

/// Apple generic versioning through `agvtool`.
///
/// `agvtool` works on the project in its working directory, so every call
/// runs next to the configured `.xcodeproj`. The tool applies one version to
/// all targets; the target passed to [`VersionControl::version_number`] is
/// only logged.
#[derive(Debug, Clone)]
pub struct AgvtoolProvider {
    program: String,
}

impl AgvtoolProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "agvtool".to_string(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn query(
        &self,
        project_root: &Path,
        project: &str,
        args: &[&str],
        what: &'static str,
    ) -> Result<String> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        let output = run_tool(&project_dir(project_root, project), &self.program, &args)?;
        output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| OperationError::MissingToolOutput {
                command: format!("{} {}", self.program, args.join(" ")),
                what,
            })
    }

    fn update(&self, project_root: &Path, project: &str, args: Vec<String>) -> Result<()> {
        run_tool(&project_dir(project_root, project), &self.program, &args).map(|_| ())
    }
}

impl Default for AgvtoolProvider {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn project_dir(project_root: &Path, project: &str) -> PathBuf {
    if project.is_empty() {
        return project_root.to_path_buf();
    }
    project_root
        .join(project)
        .parent()
        .map_or_else(|| project_root.to_path_buf(), Path::to_path_buf)
}

impl VersionControl for AgvtoolProvider {
    fn version_number(&self, project_root: &Path, project: &str, target: &str) -> Result<String> {
        debug!(project, target, "reading marketing version");
        self.query(
            project_root,
            project,
            &["what-marketing-version", "-terse1"],
            "marketing version",
        )
    }

    fn build_number(&self, project_root: &Path, project: &str) -> Result<String> {
        self.query(project_root, project, &["what-version", "-terse"], "build number")
    }

    fn set_version_number(&self, project_root: &Path, project: &str, version: &str) -> Result<()> {
        self.update(
            project_root,
            project,
            vec!["new-marketing-version".to_string(), version.to_string()],
        )
    }

    fn set_build_number(
        &self,
        project_root: &Path,
        project: &str,
        build_number: &str,
    ) -> Result<()> {
        self.update(
            project_root,
            project,
            vec![
                "new-version".to_string(),
                "-all".to_string(),
                build_number.to_string(),
            ],
        )
    }
}
