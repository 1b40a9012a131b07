use shiplane_core::VersionUpdateType;
use shiplane_lane::LaneStep;
use shiplane_version::{
    VersionInfo, VersionSlot, bump_version, next_build_number, parse_marketing_version,
};
use tracing::info;

use crate::operations::{DistributionData, LaneContext};
use crate::{OperationError, Result};

const FIRST_BUILD_NUMBER: &str = "1";

/// Bumps the marketing version or the build number in the project.
pub struct VersionUpdateStep;

fn apply_update(ctx: &LaneContext, update_type: Option<VersionUpdateType>) -> Result<()> {
    let Some(update_type) = update_type else {
        return Ok(());
    };
    let config = ctx.config();
    let root = ctx.project_root();
    let version_control = ctx.version_control();

    if let Some(bump) = update_type.bump_type() {
        let current = version_control.version_number(root, config.project(), config.scheme())?;
        let next = bump_version(&parse_marketing_version(&current)?, bump).to_string();
        version_control.set_version_number(root, config.project(), &next)?;
        version_control.set_build_number(root, config.project(), FIRST_BUILD_NUMBER)?;
        info!(from = %current, to = %next, "{bump} version bump");
    } else if update_type == VersionUpdateType::Build {
        let current = version_control.build_number(root, config.project())?;
        let next = next_build_number(&current)?;
        version_control.set_build_number(root, config.project(), &next)?;
        info!(from = %current, to = %next, "build number bump");
    }

    Ok(())
}

fn log_summary(ctx: &LaneContext, next: &VersionInfo) {
    let current = ctx.version(VersionSlot::Current);
    info!(
        "current version<build>: {}<{}>",
        current.version, current.build_number
    );
    if ctx.is_version_changed() {
        info!("next version<build>: {}<{}>", next.version, next.build_number);
        info!("is version changed ... true");
    }
}

impl LaneStep for VersionUpdateStep {
    type Input = DistributionData;
    type Output = DistributionData;
    type Context = LaneContext;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "version"
    }

    fn description(&self) -> &'static str {
        "Update version information"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        input: Self::Input,
    ) -> std::result::Result<Self::Output, Self::Error> {
        let updated = apply_update(ctx, input.parameters.version_update_type);

        // the next slot is read even when the update failed half way
        let refetched = ctx.fetch_version(VersionSlot::Next);
        if let Ok(next) = &refetched {
            log_summary(ctx, next);
        }

        updated?;
        refetched?;
        Ok(input)
    }
}
