//! Data models for outlier detection.
//!
//! This module contains data structures used throughout the outlier detection system.

mod column_stats;
mod method;
mod outlier_result;

pub use column_stats::{Bounds, ColumnStats};
pub use method::DetectionMethod;
pub use outlier_result::{OutlierReport, OutlierResult};
