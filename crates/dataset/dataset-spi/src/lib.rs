//! Dataset Service Provider Interface
//!
//! Defines the tabular dataset model, its schema, and the trait for
//! sources that produce datasets.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DatasetError, Result};
pub use model::{Column, ColumnData, ColumnKind, ColumnSpec, Dataset, Schema};
