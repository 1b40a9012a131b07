use std::fmt;

use shiplane_core::{Options, UploadType};
use shiplane_lane::{Lane, LaneAuditLog, LaneBuilder, LaneStep};
use shiplane_version::VersionSlot;
use tracing::{debug, error, info, warn};

use super::steps::{
    BuildStep, GitPublishStep, NotifyStep, ReadyStep, SymbolUploadStep, UploadStep,
    VersionUpdateStep,
};
use super::{DistributionData, LaneContext};
use crate::{OperationError, Parameters, Result};

const MESSAGE_KEY: &str = "message";

pub type DistributionLane = Lane<DistributionData, DistributionData, LaneContext, OperationError>;

/// The full release chain: ready, version, build, upload, git, dsym.
#[must_use]
pub fn distribution_lane() -> DistributionLane {
    LaneBuilder::new()
        .first_step(ReadyStep)
        .then(VersionUpdateStep)
        .then(BuildStep)
        .then(UploadStep)
        .then(GitPublishStep)
        .then(SymbolUploadStep)
        .build()
}

fn single_step<S>(step: S) -> DistributionLane
where
    S: LaneStep<
            Input = DistributionData,
            Output = DistributionData,
            Context = LaneContext,
            Error = OperationError,
        > + 'static,
{
    LaneBuilder::new().first_step(step).build()
}

/// A lane that can be invoked by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneName {
    Release,
    Beta,
    Ready,
    Version,
    Build,
    Upload,
    Git,
    Dsym,
    Slack,
}

impl LaneName {
    pub const ALL: [Self; 9] = [
        Self::Release,
        Self::Beta,
        Self::Ready,
        Self::Version,
        Self::Build,
        Self::Upload,
        Self::Git,
        Self::Dsym,
        Self::Slack,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Beta => "beta",
            Self::Ready => "ready",
            Self::Version => "version",
            Self::Build => "build",
            Self::Upload => "upload",
            Self::Git => "git",
            Self::Dsym => "dsym",
            Self::Slack => "slack",
        }
    }

    /// Entry lanes run the whole chain and announce the result.
    #[must_use]
    pub fn is_entry(self) -> bool {
        matches!(self, Self::Release | Self::Beta)
    }
}

impl fmt::Display for LaneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful lane run.
#[derive(Debug)]
pub struct LaneOutput {
    pub lane: LaneName,
    pub data: DistributionData,
    pub audit: LaneAuditLog,
}

/// Runs named lanes with the before, after and error hooks around them.
pub struct LaneOperation {
    context: LaneContext,
    parameters: Option<Parameters>,
}

impl LaneOperation {
    #[must_use]
    pub fn new(context: LaneContext) -> Self {
        Self {
            context,
            parameters: None,
        }
    }

    #[must_use]
    pub fn context(&self) -> &LaneContext {
        &self.context
    }

    /// Parameters kept by the last entry lane.
    #[must_use]
    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    /// Run `lane` with the raw command line options.
    ///
    /// # Errors
    ///
    /// Returns the first fatal failure, after it has been logged and
    /// announced.
    pub fn run(&mut self, lane: LaneName, options: Option<&Options>) -> Result<LaneOutput> {
        let result = self
            .before_all()
            .and_then(|()| self.run_lane(lane, options));

        match result {
            Ok(output) => {
                self.after_all(lane);
                Ok(output)
            }
            Err(err) => {
                self.on_error(lane, &err);
                Err(err)
            }
        }
    }

    fn before_all(&self) -> Result<()> {
        if let Err(err) = self
            .context
            .tool_updater()
            .update_tools(self.context.project_root())
        {
            warn!(error = %err, "toolchain update failed, continuing with the installed version");
        }

        let current = self.context.fetch_version(VersionSlot::Current)?;
        debug!(version = %current.text(), "read current version");
        Ok(())
    }

    fn run_lane(&mut self, lane: LaneName, options: Option<&Options>) -> Result<LaneOutput> {
        let (chain, parameters) = match lane {
            LaneName::Release => {
                let parameters = Parameters::for_release(options);
                self.parameters = Some(parameters.clone());
                (distribution_lane(), parameters)
            }
            LaneName::Beta => {
                let parameters = Parameters::for_beta(options);
                self.parameters = Some(parameters.clone());
                (distribution_lane(), parameters)
            }
            LaneName::Ready => (single_step(ReadyStep), Parameters::from_options(options)),
            LaneName::Version => (
                single_step(VersionUpdateStep),
                Parameters::from_options(options),
            ),
            LaneName::Build => (single_step(BuildStep), Parameters::from_options(options)),
            LaneName::Upload => (single_step(UploadStep), Parameters::from_options(options)),
            LaneName::Git => (single_step(GitPublishStep), Parameters::from_options(options)),
            LaneName::Dsym => (
                single_step(SymbolUploadStep),
                Parameters::from_options(options),
            ),
            LaneName::Slack => {
                let message = options.and_then(|map| map.get(MESSAGE_KEY)).cloned();
                (
                    single_step(NotifyStep::new(message)),
                    Parameters::from_options(options),
                )
            }
        };

        info!(lane = %lane, steps = ?chain.step_names(), "running lane");
        let input = DistributionData::new(parameters);
        let (result, audit) = chain.execute_with_audit(&self.context, input);
        debug!(elapsed = ?audit.elapsed(), "lane summary:\n{}", audit.summary());

        let data = result?;
        Ok(LaneOutput { lane, data, audit })
    }

    fn after_all(&self, lane: LaneName) {
        if !lane.is_entry() {
            return;
        }
        if let Some(upload_type) = self.upload_type() {
            self.context.notify(&upload_type.success_message(), true, None);
        }
    }

    fn on_error(&self, lane: LaneName, err: &OperationError) {
        let detail = err.detail();
        error!("ERROR: {lane}, errorInfo: {detail}");

        let message = self.upload_type().map_or_else(
            || format!("{lane} failed .."),
            UploadType::failure_message,
        );
        self.context.notify(&message, false, Some(&detail));
    }

    fn upload_type(&self) -> Option<UploadType> {
        self.parameters.as_ref().and_then(|p| p.upload_type)
    }
}
