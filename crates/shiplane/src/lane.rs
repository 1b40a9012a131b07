use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use shiplane_config::{ProcessEnv, ShiplaneConfig};
use shiplane_core::{Options, parse_option_pair};
use shiplane_operations::operations::{Collaborators, LaneContext, LaneName, LaneOperation};
use shiplane_operations::providers::{
    AgvtoolProvider, CocoaPodsProvider, FastlaneActionRunner, Git2Provider, SlackWebhook,
};
use tracing::info;

use crate::error::Result;

const SYMBOLS_DIRECTORY: &str = "dsyms";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LaneArg {
    /// Full App Store release: patch bump, build, submit, tag
    Release,
    /// TestFlight build from any branch: build number bump, build, upload
    Beta,
    /// Check the branch and install dependencies
    Ready,
    /// Update the version or build number
    Version,
    /// Build the app
    Build,
    /// Upload the built binary
    Upload,
    /// Commit, tag and push the version change
    Git,
    /// Move debug symbols to crash reporting
    Dsym,
    /// Send a chat notification
    Slack,
}

impl From<LaneArg> for LaneName {
    fn from(arg: LaneArg) -> Self {
        match arg {
            LaneArg::Release => Self::Release,
            LaneArg::Beta => Self::Beta,
            LaneArg::Ready => Self::Ready,
            LaneArg::Version => Self::Version,
            LaneArg::Build => Self::Build,
            LaneArg::Upload => Self::Upload,
            LaneArg::Git => Self::Git,
            LaneArg::Dsym => Self::Dsym,
            LaneArg::Slack => Self::Slack,
        }
    }
}

/// Collect `key:value` arguments. A repeated key keeps the last value.
pub(crate) fn parse_options(raw: &[String]) -> Result<Options> {
    let mut options = Options::new();
    for arg in raw {
        let (key, value) = parse_option_pair(arg)?;
        options.insert(key, value);
    }
    Ok(options)
}

fn collaborators(config: &ShiplaneConfig) -> Collaborators {
    let fastlane = Arc::new(FastlaneActionRunner::new(
        config.output_directory().join(SYMBOLS_DIRECTORY),
    ));
    Collaborators {
        dependency_manager: Arc::new(CocoaPodsProvider::new()),
        version_control: Arc::new(AgvtoolProvider::new()),
        app_builder: fastlane.clone(),
        store_uploader: fastlane.clone(),
        git_provider: Arc::new(Git2Provider::from_env(&ProcessEnv)),
        symbol_service: fastlane.clone(),
        chat_notifier: Arc::new(SlackWebhook::new()),
        tool_updater: fastlane,
    }
}

pub(crate) fn run(
    project_root: &Path,
    config_file: Option<&Path>,
    lane: LaneArg,
    raw_options: &[String],
) -> Result<()> {
    let options = parse_options(raw_options)?;
    let config = ShiplaneConfig::load(project_root, config_file, &ProcessEnv)?;
    let collaborators = collaborators(&config);
    let mut operation = LaneOperation::new(LaneContext::new(config, collaborators));

    let output = operation.run(LaneName::from(lane), Some(&options))?;

    info!("lane '{}' finished", output.lane);
    println!("{}", output.audit.summary());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn options_are_split_at_first_colon() -> anyhow::Result<()> {
        let options = parse_options(&args(&[
            "upload_type:testflight",
            "message:build 1.2: ready",
        ]))?;

        assert_eq!(options.get("upload_type").map(String::as_str), Some("testflight"));
        assert_eq!(options.get("message").map(String::as_str), Some("build 1.2: ready"));
        Ok(())
    }

    #[test]
    fn repeated_key_keeps_last_value() -> anyhow::Result<()> {
        let options = parse_options(&args(&["pod_update:true", "pod_update:false"]))?;

        assert_eq!(options.len(), 1);
        assert_eq!(options.get("pod_update").map(String::as_str), Some("false"));
        Ok(())
    }

    #[test]
    fn argument_without_colon_is_rejected() {
        let result = parse_options(&args(&["release"]));

        assert!(matches!(result, Err(CliError::Option(_))));
    }

    #[test]
    fn every_lane_argument_maps_to_a_lane() {
        for arg in LaneArg::value_variants() {
            let name = LaneName::from(*arg);
            let value = arg.to_possible_value().map(|v| v.get_name().to_string());
            assert_eq!(value.as_deref(), Some(name.as_str()));
        }
    }
}
