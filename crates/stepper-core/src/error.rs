//! Error types for stepper documents.

use thiserror::Error;

/// Result alias for stepper operations.
pub type StepperResult<T> = Result<T, StepperError>;

/// Errors raised while loading or validating stepper input.
#[derive(Debug, Error)]
pub enum StepperError {
    /// The document omitted its `steps` list entirely.
    #[error("stepper document does not declare any steps")]
    MissingSteps,
    /// The document could not be parsed.
    #[error("invalid stepper document")]
    InvalidDocument {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// Orientation value was neither `horizontal` nor `vertical`.
    #[error("invalid orientation '{value}'")]
    InvalidOrientation {
        /// Orientation payload provided by the caller.
        value: String,
    },
}
