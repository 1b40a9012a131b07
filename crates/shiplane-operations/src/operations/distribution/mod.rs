mod context;
mod data;
mod operation;
pub mod steps;

pub use context::{Collaborators, LaneContext};
pub use data::{DistributionData, GitPublishResult};
pub use operation::{DistributionLane, LaneName, LaneOperation, LaneOutput, distribution_lane};
