//! Pipeline error types.

use dataset_spi::DatasetError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur during pipeline operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Category not seen while fitting an encoder
    #[error("Unknown category '{category}' in column '{column}'")]
    UnknownCategory { column: String, category: String },

    /// Transformation failed
    #[error("Transformation failed: {0}")]
    TransformError(String),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
