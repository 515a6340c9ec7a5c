//! Outlier detector and treatment trait definitions.

use crate::error::Result;
use crate::model::{Bounds, DetectionMethod, OutlierResult};

/// Outlier detector trait.
///
/// Implementations derive their statistics from `values` on every call;
/// nothing is cached between calls and the input is never modified.
pub trait OutlierDetector: Send + Sync {
    /// Method implemented by this detector.
    fn method(&self) -> DetectionMethod;

    /// Flag the outliers of one column.
    fn detect(&self, column: &str, values: &[f64]) -> Result<OutlierResult>;

    /// Compute per-value outlier scores without thresholding.
    fn score(&self, column: &str, values: &[f64]) -> Result<Vec<f64>>;
}

/// Outlier treatment trait.
pub trait OutlierTreatment: Send + Sync {
    /// Bounds the treatment would apply to this column.
    fn bounds(&self, column: &str, values: &[f64]) -> Result<Bounds>;

    /// Return a treated copy of the column.
    fn treat(&self, column: &str, values: &[f64]) -> Result<Vec<f64>>;
}
