mod distribution;

pub use distribution::steps::{
    BuildStep, GitPublishStep, NotifyStep, ReadyStep, SymbolUploadStep, UploadStep,
    VersionUpdateStep,
};
pub use distribution::{
    Collaborators, DistributionData, DistributionLane, GitPublishResult, LaneContext, LaneName,
    LaneOperation, LaneOutput, distribution_lane,
};
