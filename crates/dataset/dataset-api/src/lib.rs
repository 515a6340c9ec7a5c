//! Dataset API
//!
//! Configuration types and builders for dataset sources.

mod config;

// Re-export SPI types
pub use dataset_spi::{
    Column, ColumnData, ColumnKind, ColumnSpec, DataSource, Dataset, DatasetError, Result, Schema,
};

pub use config::{SyntheticConfig, SyntheticConfigBuilder};
