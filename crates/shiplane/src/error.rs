use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("invalid lane option")]
    Option(#[from] shiplane_core::ShiplaneError),

    #[error("failed to load configuration")]
    Config(#[from] shiplane_config::ConfigError),

    #[error(transparent)]
    Operation(#[from] shiplane_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;
