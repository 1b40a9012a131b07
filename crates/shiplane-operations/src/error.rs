use std::error::Error as _;

use shiplane_lane::LaneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] shiplane_core::ShiplaneError),

    #[error(transparent)]
    Config(#[from] shiplane_config::ConfigError),

    #[error(transparent)]
    Git(#[from] shiplane_git::GitError),

    #[error("version calculation failed")]
    VersionCalculation(#[from] shiplane_version::VersionError),

    #[error("not on the 'master' branch (current branch: {branch})")]
    NotOnMasterBranch { branch: String },

    #[error("dependency update failed: {message}")]
    DependencyUpdate { message: String },

    #[error("failed to run '{command}'")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("'{command}' printed no {what}")]
    MissingToolOutput { command: String, what: &'static str },

    #[error("failed to encode tool argument")]
    Json(#[from] serde_json::Error),

    #[error("failed to deliver chat message")]
    Notification(#[from] reqwest::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("lane '{lane}' failed")]
    LaneFailed {
        lane: String,
        #[source]
        source: Box<OperationError>,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;

impl From<LaneError<OperationError>> for OperationError {
    fn from(err: LaneError<OperationError>) -> Self {
        let (lane, source) = err.into_parts();
        Self::LaneFailed {
            lane,
            source: Box::new(source),
        }
    }
}

impl OperationError {
    /// The error and every cause joined with `: `, as sent with failure
    /// notifications.
    #[must_use]
    pub fn detail(&self) -> String {
        let mut parts = vec![self.to_string()];
        let mut source = self.source();
        while let Some(cause) = source {
            parts.push(cause.to_string());
            source = cause.source();
        }
        parts.join(": ")
    }
}
