mod error;
pub mod notifier;
pub mod operations;
mod parameters;
pub mod providers;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use error::{OperationError, Result};
pub use parameters::Parameters;
