//! Git plumbing for the release lanes: branch lookup, staging, commits,
//! annotated tags and pushes, all through `git2`.

mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{CommitInfo, PushInfo, TagInfo};

pub type Result<T> = std::result::Result<T, GitError>;
