use shiplane_lane::LaneStep;
use tracing::info;

use crate::OperationError;
use crate::operations::{DistributionData, LaneContext};
use crate::traits::SymbolDownload;

/// Moves debug symbols from App Store Connect to the crash reporter.
pub struct SymbolUploadStep;

impl LaneStep for SymbolUploadStep {
    type Input = DistributionData;
    type Output = DistributionData;
    type Context = LaneContext;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "dsym"
    }

    fn description(&self) -> &'static str {
        "Upload debug symbols"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        mut input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        // `none` carries no version filter, so like `all` it fetches every version.
        let dsym_upload_type = input.parameters.dsym_upload_type;
        let config = ctx.config();
        let symbols = ctx.symbol_service();
        let root = ctx.project_root();

        let request = SymbolDownload {
            apple_id: config.apple_id(),
            app_identifier: config.app_identifier(),
            version: dsym_upload_type.version_filter(),
            min_version: input.parameters.version.as_deref(),
        };
        let paths = symbols.download(root, &request)?;

        if paths.is_empty() {
            info!("no debug symbols to upload");
            return Ok(input);
        }

        info!(count = paths.len(), "uploading debug symbols");
        for path in &paths {
            symbols.upload(root, path, config.google_service_info_path())?;
        }
        symbols.clean_build_artifacts(root)?;

        input.symbols_uploaded = paths;
        Ok(input)
    }
}
