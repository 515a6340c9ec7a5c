//! Dataset error types.

use thiserror::Error;

/// Dataset errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// Requested column does not exist
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Column exists but holds the wrong kind of data
    #[error("Column '{column}' is not {expected}")]
    TypeMismatch { column: String, expected: String },

    /// Column length differs from the rest of the table
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Empty cell in a numeric column
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    /// Cell in a numeric column that is not a finite number
    #[error("Non-numeric value '{value}' in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// Dataset does not match the expected schema
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// No rows to work with
    #[error("Dataset is empty")]
    Empty,

    /// Invalid configuration value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Reading or writing the underlying file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
