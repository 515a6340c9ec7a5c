//! Contracts for outlier detection and treatment.

mod outlier_detector;

pub use outlier_detector::{OutlierDetector, OutlierTreatment};
