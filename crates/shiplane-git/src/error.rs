use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("HEAD is detached, not on a branch")]
    DetachedHead,

    #[error("nothing to commit, the index matches HEAD")]
    NothingToCommit,

    #[error("tag '{name}' already exists")]
    TagExists { name: String },

    #[error("remote '{name}' is not configured")]
    RemoteNotFound { name: String },

    #[error("remote rejected '{refname}': {message}")]
    PushRejected { refname: String, message: String },
}
