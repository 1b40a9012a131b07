//! Lane chains for deployment automation.
//!
//! A lane is an ordered chain of steps. Each step receives the previous
//! step's output, and the first failing step aborts the rest of the chain.
//! Nothing is retried and nothing is rolled back.

mod audit;
mod builder;
mod erased;
mod error;
mod lane;
mod step;

pub use audit::{LaneAuditLog, StepRecord, StepStatus};
pub use builder::LaneBuilder;
pub use error::LaneError;
pub use lane::Lane;
pub use step::LaneStep;
