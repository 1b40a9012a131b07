use shiplane_lane::LaneStep;
use tracing::{debug, info};

use crate::OperationError;
use crate::operations::{DistributionData, LaneContext};

const RELEASE_BRANCH: &str = "master";

/// Checks the branch and installs dependencies before anything is built.
pub struct ReadyStep;

/// Last `/`-separated segment, so `origin/master` and `refs/heads/master`
/// both read as `master`.
fn short_branch_name(branch: &str) -> &str {
    branch.rsplit('/').next().unwrap_or(branch)
}

impl LaneStep for ReadyStep {
    type Input = DistributionData;
    type Output = DistributionData;
    type Context = LaneContext;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "ready"
    }

    fn description(&self) -> &'static str {
        "Check branch and update dependencies"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let parameters = &input.parameters;
        info!("parameters: {parameters}");

        if parameters.only_master_branch {
            let branch = ctx.git_provider().current_branch(ctx.project_root())?;
            let current = short_branch_name(&branch);
            debug!(branch = %branch, current, "checking release branch");
            if current != RELEASE_BRANCH {
                return Err(OperationError::NotOnMasterBranch {
                    branch: current.to_string(),
                });
            }
        }

        if parameters.pod_update {
            ctx.dependency_manager()
                .install(ctx.project_root(), true)
                .map_err(|err| match err {
                    OperationError::DependencyUpdate { .. } => err,
                    other => OperationError::DependencyUpdate {
                        message: other.detail(),
                    },
                })?;
        }

        Ok(input)
    }
}
