use shiplane_core::UploadType;
use shiplane_lane::LaneStep;

use crate::OperationError;
use crate::operations::{DistributionData, LaneContext};

/// Sends a chat message: the explicit one if given, else the upload type's
/// success message.
pub struct NotifyStep {
    message: Option<String>,
}

impl NotifyStep {
    #[must_use]
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }
}

impl LaneStep for NotifyStep {
    type Input = DistributionData;
    type Output = DistributionData;
    type Context = LaneContext;
    type Error = OperationError;

    fn name(&self) -> &'static str {
        "slack"
    }

    fn description(&self) -> &'static str {
        "Send chat notification"
    }

    fn execute(
        &self,
        ctx: &Self::Context,
        input: Self::Input,
    ) -> Result<Self::Output, Self::Error> {
        let message = self.message.clone().or_else(|| {
            input
                .parameters
                .upload_type
                .map(UploadType::success_message)
        });

        if let Some(message) = message {
            ctx.notify(&message, true, None);
        }
        Ok(input)
    }
}
