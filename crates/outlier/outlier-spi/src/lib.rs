//! Outlier Detection Service Provider Interface
//!
//! Defines traits and types for detecting and treating outliers in the
//! numeric columns of a dataset.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{OutlierDetector, OutlierTreatment};
pub use error::{OutlierError, Result};
pub use model::{Bounds, ColumnStats, DetectionMethod, OutlierReport, OutlierResult};
