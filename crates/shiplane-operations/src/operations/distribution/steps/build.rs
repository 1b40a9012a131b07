use shiplane_lane::LaneStep;
use tracing::info;

use crate::OperationError;
use crate::operations::{DistributionData, LaneContext};
use crate::traits::BuildRequest;

const EXPORT_FLAGS: &[&str] = &["-allowProvisioningUpdates"];

pub struct BuildStep;

impl LaneStep for BuildStep {
    type Input = DistributionData;
    type Output = DistributionData;
    type Context = LaneContext;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Build the app"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let output_directory = ctx.config().output_directory();
        let request = BuildRequest {
            scheme: ctx.config().scheme(),
            output_directory: &output_directory,
            configuration: input.parameters.build_configuration,
            extra_flags: EXPORT_FLAGS,
        };

        let artifact = ctx.app_builder().build(ctx.project_root(), &request)?;
        info!(path = %artifact.path.display(), "build finished");

        input.artifact = Some(artifact);
        Ok(input)
    }
}
