use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid marketing version '{0}'")]
    InvalidVersion(String),

    #[error("invalid build number '{0}'")]
    InvalidBuildNumber(String),
}
