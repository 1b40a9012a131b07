pub mod error;
mod option;
pub mod types;

pub use error::*;
pub use option::{LaneOption, Options, parse_option_pair};
pub use types::*;
