//! Outlier detection error types.

use dataset_spi::DatasetError;
use thiserror::Error;

/// Outlier detection errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlierError {
    #[error("Insufficient data in column '{column}': required {required}, got {got}")]
    InsufficientData {
        column: String,
        required: usize,
        got: usize,
    },

    #[error("Non-finite value {value} in column '{column}' at row {row}")]
    NonFinite { column: String, row: usize, value: f64 },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Result type for outlier operations.
pub type Result<T> = std::result::Result<T, OutlierError>;
