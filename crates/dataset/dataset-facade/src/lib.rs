//! Dataset Facade
//!
//! Unified re-exports for the dataset module.
//!
//! This facade provides a single entry point to all dataset functionality:
//! - `Dataset`, `Schema`, and the `DataSource` trait from SPI
//! - `SyntheticConfig` from API
//! - The student schema, synthetic generator, and CSV source from Core

// Re-export everything from SPI
pub use dataset_spi::*;

// Re-export everything from API
pub use dataset_api::*;

// Re-export everything from Core
pub use dataset_core::*;
