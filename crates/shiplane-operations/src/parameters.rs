use std::fmt;

use shiplane_core::{
    BuildConfiguration, DsymUploadType, LaneOption, Options, UploadType, VersionUpdateType,
};

const VERSION_KEY: &str = "version";
const BUILD_NUMBER_KEY: &str = "build_number";
const POD_UPDATE_KEY: &str = "pod_update";
const ONLY_MASTER_BRANCH_KEY: &str = "only_master_barnch";
const ONLY_MASTER_BRANCH_ALIAS: &str = "only_master_branch";

/// Resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub version_update_type: Option<VersionUpdateType>,
    pub build_configuration: BuildConfiguration,
    pub upload_type: Option<UploadType>,
    pub dsym_upload_type: DsymUploadType,
    pub version: Option<String>,
    pub build_number: Option<String>,
    pub pod_update: bool,
    pub only_master_branch: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            version_update_type: None,
            build_configuration: BuildConfiguration::default(),
            upload_type: None,
            dsym_upload_type: DsymUploadType::default(),
            version: None,
            build_number: None,
            pod_update: true,
            only_master_branch: true,
        }
    }
}

impl Parameters {
    /// Resolve every option, falling back to the defaults for anything that
    /// is missing or not recognized.
    #[must_use]
    pub fn from_options(options: Option<&Options>) -> Self {
        let defaults = Self::default();
        let raw = |key: &str| options.and_then(|map| map.get(key));

        let only_master_branch = raw(ONLY_MASTER_BRANCH_KEY)
            .or_else(|| raw(ONLY_MASTER_BRANCH_ALIAS))
            .map_or(defaults.only_master_branch, |value| value == "true");

        Self {
            version_update_type: VersionUpdateType::from_options(options),
            build_configuration: BuildConfiguration::from_options(options)
                .unwrap_or(defaults.build_configuration),
            upload_type: UploadType::from_options(options),
            dsym_upload_type: DsymUploadType::from_options(options)
                .unwrap_or(defaults.dsym_upload_type),
            version: raw(VERSION_KEY).cloned(),
            build_number: raw(BUILD_NUMBER_KEY).cloned(),
            pod_update: raw(POD_UPDATE_KEY).map_or(defaults.pod_update, |value| value == "true"),
            only_master_branch,
        }
    }

    /// Parameters for the `release` lane: patch bump and App Store
    /// submission unless the options say otherwise.
    #[must_use]
    pub fn for_release(options: Option<&Options>) -> Self {
        let mut parameters = Self::from_options(options);
        parameters
            .version_update_type
            .get_or_insert(VersionUpdateType::Patch);
        parameters.upload_type.get_or_insert(UploadType::Appstore);
        parameters
    }

    /// Parameters for the `beta` lane: build-number bump and TestFlight,
    /// from any branch.
    #[must_use]
    pub fn for_beta(options: Option<&Options>) -> Self {
        let mut parameters = Self::from_options(options);
        parameters
            .version_update_type
            .get_or_insert(VersionUpdateType::Build);
        parameters.upload_type.get_or_insert(UploadType::Testflight);
        parameters.only_master_branch = false;
        parameters
    }
}

fn optional<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "version_update_type={}, build_configuration={}, upload_type={}, \
             dsym_upload_type={}, version={}, build_number={}, pod_update={}, \
             only_master_branch={}",
            optional(self.version_update_type.map(VersionUpdateType::as_str)),
            self.build_configuration,
            optional(self.upload_type),
            self.dsym_upload_type.as_str(),
            optional(self.version.as_deref()),
            optional(self.build_number.as_deref()),
            self.pod_update,
            self.only_master_branch,
        )
    }
}
