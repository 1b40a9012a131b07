use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::CONFIG_FILE_NAME;
use crate::env::EnvSource;
use crate::error::ConfigError;
use crate::file::{ConfigFile, DeliverFile, read_config_file};

const DEFAULT_OUTPUT_DIRECTORY: &str = "build";
const DEFAULT_COMMIT_MESSAGE: &str = "Bump version to %@";
const DEFAULT_TAG_MESSAGE: &str = "%@";
const DEFAULT_BUILT_BY: &str = "shiplane";

/// Store submission defaults passed to the App Store upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverSettings {
    force: bool,
    skip_screenshots: bool,
    skip_metadata: bool,
    skip_binary_upload: bool,
    submit_for_review: bool,
    automatic_release: bool,
    precheck_include_in_app_purchases: bool,
    submission_information: IndexMap<String, bool>,
}

impl Default for DeliverSettings {
    fn default() -> Self {
        let submission_information = [
            ("add_id_info_limits_tracking", true),
            ("add_id_info_serves_ads", false),
            ("add_id_info_tracks_action", false),
            ("add_id_info_tracks_install", true),
            ("add_id_info_uses_idfa", true),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

        Self {
            force: true,
            skip_screenshots: true,
            skip_metadata: false,
            skip_binary_upload: false,
            submit_for_review: true,
            automatic_release: false,
            precheck_include_in_app_purchases: false,
            submission_information,
        }
    }
}

impl DeliverSettings {
    fn from_file(file: DeliverFile) -> Self {
        let defaults = Self::default();
        Self {
            force: file.force.unwrap_or(defaults.force),
            skip_screenshots: file.skip_screenshots.unwrap_or(defaults.skip_screenshots),
            skip_metadata: file.skip_metadata.unwrap_or(defaults.skip_metadata),
            skip_binary_upload: file
                .skip_binary_upload
                .unwrap_or(defaults.skip_binary_upload),
            submit_for_review: file.submit_for_review.unwrap_or(defaults.submit_for_review),
            automatic_release: file.automatic_release.unwrap_or(defaults.automatic_release),
            precheck_include_in_app_purchases: file
                .precheck_include_in_app_purchases
                .unwrap_or(defaults.precheck_include_in_app_purchases),
            submission_information: file
                .submission_information
                .unwrap_or(defaults.submission_information),
        }
    }

    #[must_use]
    pub fn force(&self) -> bool {
        self.force
    }

    #[must_use]
    pub fn skip_screenshots(&self) -> bool {
        self.skip_screenshots
    }

    #[must_use]
    pub fn skip_metadata(&self) -> bool {
        self.skip_metadata
    }

    #[must_use]
    pub fn skip_binary_upload(&self) -> bool {
        self.skip_binary_upload
    }

    #[must_use]
    pub fn submit_for_review(&self) -> bool {
        self.submit_for_review
    }

    #[must_use]
    pub fn automatic_release(&self) -> bool {
        self.automatic_release
    }

    #[must_use]
    pub fn precheck_include_in_app_purchases(&self) -> bool {
        self.precheck_include_in_app_purchases
    }

    #[must_use]
    pub fn submission_information(&self) -> &IndexMap<String, bool> {
        &self.submission_information
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_submit_for_review(mut self, submit_for_review: bool) -> Self {
        self.submit_for_review = submit_for_review;
        self
    }
}

/// Settings for one shiplane run.
///
/// Values come from `Shiplane.toml` at the project root (if present) and are
/// overridden by environment variables of the same name, lower-case or
/// upper-case.
#[derive(Debug, Clone)]
pub struct ShiplaneConfig {
    project_root: PathBuf,
    project: String,
    scheme: String,
    output_directory: PathBuf,
    git_message_commit: String,
    git_message_tag: String,
    slack_url: String,
    slack_built_by: String,
    apple_id: String,
    app_identifier: String,
    google_service_info_path: String,
    deliver: DeliverSettings,
}

impl ShiplaneConfig {
    /// Defaults only, no file and no environment.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::from_parts(project_root.into(), ConfigFile::default(), &NoEnv)
    }

    /// Load the configuration for `project_root`.
    ///
    /// An explicit `config_file` must exist. Without one, `Shiplane.toml` in
    /// the project root is read when present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or a file cannot be
    /// read or parsed.
    pub fn load(
        project_root: &Path,
        config_file: Option<&Path>,
        env: &impl EnvSource,
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => read_config_file(path)?,
            None => {
                let default_path = project_root.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    read_config_file(&default_path)?
                } else {
                    debug!(
                        path = %default_path.display(),
                        "no configuration file, using environment"
                    );
                    ConfigFile::default()
                }
            }
        };

        Ok(Self::from_parts(project_root.to_path_buf(), file, env))
    }

    fn from_parts(project_root: PathBuf, file: ConfigFile, env: &impl EnvSource) -> Self {
        // An empty variable overrides the file and resets the key to its default.
        let pick = |key: &str, from_file: Option<String>, default: &str| match env.lookup(key) {
            Some(value) if value.is_empty() => default.to_string(),
            Some(value) => value,
            None => from_file.unwrap_or_else(|| default.to_string()),
        };

        let output_directory = PathBuf::from(pick(
            "output_directory",
            file.output_directory,
            DEFAULT_OUTPUT_DIRECTORY,
        ));

        Self {
            project: pick("project", file.project, ""),
            scheme: pick("scheme", file.scheme, ""),
            output_directory,
            git_message_commit: pick(
                "git_message_commit",
                file.git_message_commit,
                DEFAULT_COMMIT_MESSAGE,
            ),
            git_message_tag: pick("git_message_tag", file.git_message_tag, DEFAULT_TAG_MESSAGE),
            slack_url: pick("slack_url", file.slack_url, ""),
            slack_built_by: pick("slack_built_by", file.slack_built_by, DEFAULT_BUILT_BY),
            apple_id: pick("apple_id", file.apple_id, ""),
            app_identifier: pick("app_identifier", file.app_identifier, ""),
            google_service_info_path: pick(
                "google_service_info_path",
                file.google_service_info_path,
                "",
            ),
            deliver: DeliverSettings::from_file(file.deliver),
            project_root,
        }
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Path of the `.xcodeproj`, relative to the project root.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Build output directory, resolved against the project root.
    #[must_use]
    pub fn output_directory(&self) -> PathBuf {
        self.project_root.join(&self.output_directory)
    }

    #[must_use]
    pub fn git_message_commit(&self) -> &str {
        &self.git_message_commit
    }

    #[must_use]
    pub fn git_message_tag(&self) -> &str {
        &self.git_message_tag
    }

    /// Chat webhook URL. Empty disables notifications.
    #[must_use]
    pub fn slack_url(&self) -> &str {
        &self.slack_url
    }

    #[must_use]
    pub fn slack_built_by(&self) -> &str {
        &self.slack_built_by
    }

    #[must_use]
    pub fn apple_id(&self) -> &str {
        &self.apple_id
    }

    #[must_use]
    pub fn app_identifier(&self) -> &str {
        &self.app_identifier
    }

    #[must_use]
    pub fn google_service_info_path(&self) -> &str {
        &self.google_service_info_path
    }

    #[must_use]
    pub fn deliver(&self) -> &DeliverSettings {
        &self.deliver
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_slack_url(mut self, slack_url: &str) -> Self {
        self.slack_url = slack_url.to_string();
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_git_messages(mut self, commit: &str, tag: &str) -> Self {
        self.git_message_commit = commit.to_string();
        self.git_message_tag = tag.to_string();
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_apple_account(mut self, apple_id: &str, app_identifier: &str) -> Self {
        self.apple_id = apple_id.to_string();
        self.app_identifier = app_identifier.to_string();
        self
    }

    #[cfg(any(test, feature = "testing"))]
    #[must_use]
    pub fn with_google_service_info_path(mut self, path: &str) -> Self {
        self.google_service_info_path = path.to_string();
        self
    }
}

struct NoEnv;

impl EnvSource for NoEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}
