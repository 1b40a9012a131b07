use shiplane_core::UploadType;
use shiplane_lane::LaneStep;
use tracing::info;

use crate::OperationError;
use crate::operations::{DistributionData, LaneContext};
use crate::traits::AppStoreSubmission;

/// Sends the built binary to App Store Connect.
pub struct UploadStep;

impl LaneStep for UploadStep {
    type Input = DistributionData;
    type Output = DistributionData;
    type Context = LaneContext;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "upload"
    }

    fn description(&self) -> &'static str {
        "Upload the binary to App Store Connect"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let config = ctx.config();
        let uploader = ctx.store_uploader();
        let root = ctx.project_root();

        match input.parameters.upload_type {
            Some(UploadType::Appstore) => {
                let submission = AppStoreSubmission {
                    apple_id: config.apple_id(),
                    app_identifier: config.app_identifier(),
                    deliver: config.deliver(),
                };
                uploader.upload_to_app_store(root, &submission)?;
            }
            Some(UploadType::Testflight) => {
                uploader.upload_to_testflight(root, config.apple_id(), false)?;
            }
            Some(UploadType::UploadOnly) => {
                uploader.upload_to_testflight(root, config.apple_id(), true)?;
            }
            Some(UploadType::None) | None => {
                info!("no upload requested");
                return Ok(input);
            }
        }

        info!(upload_type = ?input.parameters.upload_type, "upload finished");
        input.upload = input.parameters.upload_type;
        Ok(input)
    }
}
