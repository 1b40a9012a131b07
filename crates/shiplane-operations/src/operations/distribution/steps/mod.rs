mod build;
mod dsym;
mod git;
mod notify;
mod ready;
mod upload;
mod version;

pub use build::BuildStep;
pub use dsym::SymbolUploadStep;
pub use git::GitPublishStep;
pub use notify::NotifyStep;
pub use ready::ReadyStep;
pub use upload::UploadStep;
pub use version::VersionUpdateStep;
