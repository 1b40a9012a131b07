use std::fmt::Debug;

use thiserror::Error;

/// Error from lane execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LaneError<E: Debug> {
    /// A step failed and the remaining steps were not run.
    #[error("lane '{step}' failed")]
    StepFailed {
        /// Name of the step that failed.
        step: String,
        /// The error that caused the step to fail.
        #[source]
        source: E,
    },
}

impl<E: Debug> LaneError<E> {
    /// Name of the step that failed.
    #[must_use]
    pub fn step(&self) -> &str {
        match self {
            Self::StepFailed { step, .. } => step,
        }
    }

    /// Consume the error, returning the step name and the underlying error.
    #[must_use]
    pub fn into_parts(self) -> (String, E) {
        match self {
            Self::StepFailed { step, source } => (step, source),
        }
    }
}
