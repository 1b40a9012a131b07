use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShiplaneError {
    #[error("invalid lane option '{0}': expected key:value")]
    InvalidOptionPair(String),

    #[error("lane option key cannot be empty in '{0}'")]
    EmptyOptionKey(String),
}

pub type Result<T> = std::result::Result<T, ShiplaneError>;
