mod bump;
mod error;
mod tracker;

pub use bump::{bump_version, next_build_number, parse_marketing_version};
pub use error::VersionError;
pub use tracker::{AppVersion, VersionInfo, VersionSlot};
