mod app_builder;
mod chat_notifier;
mod dependency_manager;
mod git_provider;
mod store_uploader;
mod symbol_service;
mod tool_updater;
mod version_control;

pub use app_builder::{AppBuilder, BuildArtifact, BuildRequest};
pub use chat_notifier::{ChatField, ChatMessage, ChatNotifier};
pub use dependency_manager::DependencyManager;
pub use git_provider::GitProvider;
pub use store_uploader::{AppStoreSubmission, StoreUploader};
pub use symbol_service::{SymbolDownload, SymbolService};
pub use tool_updater::ToolUpdater;
pub use version_control::VersionControl;
