//! Outlier Facade
//!
//! Unified re-exports for the outlier module.
//!
//! This facade provides a single entry point to all outlier functionality:
//! - `OutlierDetector` / `OutlierTreatment` traits and result types from SPI
//! - Detector and scan configuration from API
//! - Z-score and IQR detectors, capping, scans, and box plots from Core

// Re-export everything from SPI
pub use outlier_spi::*;

// Re-export everything from API
pub use outlier_api::*;

// Re-export everything from Core
pub use outlier_core::*;
