use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::command::run_tool_streaming;
use crate::Result;
use crate::traits::{
    AppBuilder, AppStoreSubmission, BuildArtifact, BuildRequest, StoreUploader, SymbolDownload,
    SymbolService, ToolUpdater,
};

const DSYM_SUFFIX: &str = ".dSYM.zip";

/// Runs single fastlane actions through `fastlane run <action> key:value...`.
///
/// Debug symbols are downloaded into `symbols_directory`, which is removed
/// again by [`SymbolService::clean_build_artifacts`].
#[derive(Debug, Clone)]
pub struct FastlaneActionRunner {
    program: String,
    symbols_directory: PathBuf,
}

impl FastlaneActionRunner {
    #[must_use]
    pub fn new(symbols_directory: impl Into<PathBuf>) -> Self {
        Self {
            program: "fastlane".to_string(),
            symbols_directory: symbols_directory.into(),
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn symbols_directory(&self) -> &Path {
        &self.symbols_directory
    }

    fn run_action(
        &self,
        project_root: &Path,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<()> {
        info!(action, "running fastlane action");
        run_tool_streaming(project_root, &self.program, &action_args(action, params))
    }
}

pub(crate) fn action_args(action: &str, params: &[(&str, String)]) -> Vec<String> {
    let mut args = vec!["run".to_string(), action.to_string()];
    args.extend(params.iter().map(|(key, value)| format!("{key}:{value}")));
    args
}

pub(crate) fn build_params(request: &BuildRequest<'_>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("scheme", request.scheme.to_string()),
        (
            "output_directory",
            request.output_directory.display().to_string(),
        ),
        ("configuration", request.configuration.as_str().to_string()),
    ];
    if !request.extra_flags.is_empty() {
        params.push(("export_xcargs", request.extra_flags.join(" ")));
    }
    params
}

pub(crate) fn app_store_params(
    submission: &AppStoreSubmission<'_>,
) -> Result<Vec<(&'static str, String)>> {
    let deliver = submission.deliver;
    Ok(vec![
        ("username", submission.apple_id.to_string()),
        ("app_identifier", submission.app_identifier.to_string()),
        ("skip_binary_upload", deliver.skip_binary_upload().to_string()),
        ("skip_screenshots", deliver.skip_screenshots().to_string()),
        ("skip_metadata", deliver.skip_metadata().to_string()),
        ("force", deliver.force().to_string()),
        ("submit_for_review", deliver.submit_for_review().to_string()),
        ("automatic_release", deliver.automatic_release().to_string()),
        (
            "precheck_include_in_app_purchases",
            deliver.precheck_include_in_app_purchases().to_string(),
        ),
        (
            "submission_information",
            serde_json::to_string(deliver.submission_information())?,
        ),
    ])
}

pub(crate) fn symbol_download_params(
    request: &SymbolDownload<'_>,
    output_directory: &Path,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("username", request.apple_id.to_string()),
        ("app_identifier", request.app_identifier.to_string()),
    ];
    if let Some(version) = request.version {
        params.push(("version", version.to_string()));
    }
    if let Some(min_version) = request.min_version {
        params.push(("min_version", min_version.to_string()));
    }
    params.push(("output_directory", output_directory.display().to_string()));
    params
}

/// Leave `directory` existing and empty, so archives from an aborted earlier
/// run are not uploaded again.
fn reset_directory(directory: &Path) -> Result<()> {
    if directory.exists() {
        fs::remove_dir_all(directory)?;
    }
    fs::create_dir_all(directory)?;
    Ok(())
}

fn downloaded_symbols(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        let is_dsym = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(DSYM_SUFFIX));
        if is_dsym {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

impl AppBuilder for FastlaneActionRunner {
    fn build(&self, project_root: &Path, request: &BuildRequest<'_>) -> Result<BuildArtifact> {
        self.run_action(project_root, "build_ios_app", &build_params(request))?;
        Ok(BuildArtifact {
            path: request
                .output_directory
                .join(format!("{}.ipa", request.scheme)),
        })
    }
}

impl StoreUploader for FastlaneActionRunner {
    fn upload_to_app_store(
        &self,
        project_root: &Path,
        submission: &AppStoreSubmission<'_>,
    ) -> Result<()> {
        self.run_action(
            project_root,
            "upload_to_app_store",
            &app_store_params(submission)?,
        )
    }

    fn upload_to_testflight(
        &self,
        project_root: &Path,
        apple_id: &str,
        skip_submission: bool,
    ) -> Result<()> {
        let mut params = vec![("username", apple_id.to_string())];
        if skip_submission {
            params.push(("skip_submission", "true".to_string()));
        }
        self.run_action(project_root, "upload_to_testflight", &params)
    }
}

impl ToolUpdater for FastlaneActionRunner {
    fn update_tools(&self, project_root: &Path) -> Result<()> {
        self.run_action(project_root, "update_fastlane", &[])
    }
}

impl SymbolService for FastlaneActionRunner {
    fn download(
        &self,
        project_root: &Path,
        request: &SymbolDownload<'_>,
    ) -> Result<Vec<PathBuf>> {
        reset_directory(&self.symbols_directory)?;
        self.run_action(
            project_root,
            "download_dsyms",
            &symbol_download_params(request, &self.symbols_directory),
        )?;
        let paths = downloaded_symbols(&self.symbols_directory)?;
        debug!(count = paths.len(), "downloaded debug symbols");
        Ok(paths)
    }

    fn upload(
        &self,
        project_root: &Path,
        dsym_path: &Path,
        service_info_path: &str,
    ) -> Result<()> {
        self.run_action(
            project_root,
            "upload_symbols_to_crashlytics",
            &[
                ("dsym_path", dsym_path.display().to_string()),
                ("gsp_path", service_info_path.to_string()),
            ],
        )
    }

    fn clean_build_artifacts(&self, _project_root: &Path) -> Result<()> {
        if self.symbols_directory.exists() {
            debug!(path = %self.symbols_directory.display(), "removing downloaded symbols");
            fs::remove_dir_all(&self.symbols_directory)?;
        }
        Ok(())
    }
}
