//! Error and result types shared across the workspace.

use core::result::Result as CoreResult;
use std::io::Error as IoError;

use serde_json::Error as SerdeJsonError;
use thiserror::Error as ThisError;

use crate::report::ValidationReport;

/// Result type for pipeline operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur while preparing or running a pipeline.
#[derive(Debug, ThisError)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// The parameter bag failed validation for the requested pipeline.
    #[error("invalid job parameters:\n{0}")]
    InvalidParameters(ValidationReport),

    /// The persisted execution state is unusable.
    #[error("execution state error: {0}")]
    State(String),

    /// A step failed while running.
    #[error("step '{step}' failed: {message}")]
    StepFailed {
        /// Name of the failing step.
        step: String,
        /// Failure description from the step body.
        message: String,
    },
}
