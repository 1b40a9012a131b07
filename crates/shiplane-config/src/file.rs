use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigFile {
    pub(crate) project: Option<String>,
    pub(crate) scheme: Option<String>,
    pub(crate) output_directory: Option<String>,
    pub(crate) git_message_commit: Option<String>,
    pub(crate) git_message_tag: Option<String>,
    pub(crate) slack_url: Option<String>,
    pub(crate) slack_built_by: Option<String>,
    pub(crate) apple_id: Option<String>,
    pub(crate) app_identifier: Option<String>,
    pub(crate) google_service_info_path: Option<String>,
    #[serde(default)]
    pub(crate) deliver: DeliverFile,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeliverFile {
    pub(crate) force: Option<bool>,
    pub(crate) skip_screenshots: Option<bool>,
    pub(crate) skip_metadata: Option<bool>,
    pub(crate) skip_binary_upload: Option<bool>,
    pub(crate) submit_for_review: Option<bool>,
    pub(crate) automatic_release: Option<bool>,
    pub(crate) precheck_include_in_app_purchases: Option<bool>,
    pub(crate) submission_information: Option<IndexMap<String, bool>>,
}

pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
