use std::cell::RefCell;
use std::path::Path;
use std::sync::Arc;

use shiplane_config::ShiplaneConfig;
use shiplane_version::{AppVersion, VersionInfo, VersionSlot};

use crate::Result;
use crate::notifier::Notifier;
use crate::traits::{
    AppBuilder, ChatNotifier, DependencyManager, GitProvider, StoreUploader, SymbolService,
    ToolUpdater, VersionControl,
};

/// The external tools a lane delegates to.
#[derive(Clone)]
pub struct Collaborators {
    pub dependency_manager: Arc<dyn DependencyManager>,
    pub version_control: Arc<dyn VersionControl>,
    pub app_builder: Arc<dyn AppBuilder>,
    pub store_uploader: Arc<dyn StoreUploader>,
    pub git_provider: Arc<dyn GitProvider>,
    pub symbol_service: Arc<dyn SymbolService>,
    pub chat_notifier: Arc<dyn ChatNotifier>,
    pub tool_updater: Arc<dyn ToolUpdater>,
}

/// Run-scoped state shared by every step of a lane.
///
/// Holds the configuration, the collaborators and the version tracker. The
/// tracker is only ever touched from the thread running the lane.
pub struct LaneContext {
    config: ShiplaneConfig,
    collaborators: Collaborators,
    notifier: Notifier,
    versions: RefCell<AppVersion>,
}

impl LaneContext {
    #[must_use]
    pub fn new(config: ShiplaneConfig, collaborators: Collaborators) -> Self {
        let notifier = Notifier::from_config(&config, Arc::clone(&collaborators.chat_notifier));
        Self {
            config,
            collaborators,
            notifier,
            versions: RefCell::new(AppVersion::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ShiplaneConfig {
        &self.config
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        self.config.project_root()
    }

    #[must_use]
    pub fn dependency_manager(&self) -> &dyn DependencyManager {
        self.collaborators.dependency_manager.as_ref()
    }

    #[must_use]
    pub fn version_control(&self) -> &dyn VersionControl {
        self.collaborators.version_control.as_ref()
    }

    #[must_use]
    pub fn app_builder(&self) -> &dyn AppBuilder {
        self.collaborators.app_builder.as_ref()
    }

    #[must_use]
    pub fn store_uploader(&self) -> &dyn StoreUploader {
        self.collaborators.store_uploader.as_ref()
    }

    #[must_use]
    pub fn git_provider(&self) -> &dyn GitProvider {
        self.collaborators.git_provider.as_ref()
    }

    #[must_use]
    pub fn symbol_service(&self) -> &dyn SymbolService {
        self.collaborators.symbol_service.as_ref()
    }

    #[must_use]
    pub fn tool_updater(&self) -> &dyn ToolUpdater {
        self.collaborators.tool_updater.as_ref()
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Populate `slot` from the project if it is still empty and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the version or build number cannot be read.
    pub fn fetch_version(&self, slot: VersionSlot) -> Result<VersionInfo> {
        let config = &self.config;
        let version_control = self.version_control();
        let read = || -> Result<(String, String)> {
            let root = config.project_root();
            let version = version_control.version_number(root, config.project(), config.scheme())?;
            let build_number = version_control.build_number(root, config.project())?;
            Ok((version, build_number))
        };

        self.versions.borrow_mut().fetch(slot, read)
    }

    /// The cached snapshot for `slot`, possibly empty.
    #[must_use]
    pub fn version(&self, slot: VersionSlot) -> VersionInfo {
        self.versions.borrow().slot(slot).clone()
    }

    #[must_use]
    pub fn is_version_changed(&self) -> bool {
        self.versions.borrow().is_changed()
    }

    /// Send a chat notification tagged with the next app version.
    pub fn notify(&self, message: &str, success: bool, error_info: Option<&str>) {
        let app_version = self.version(VersionSlot::Next).text();
        self.notifier
            .send(message, success, error_info, &app_version);
    }
}
