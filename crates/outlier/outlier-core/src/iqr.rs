//! IQR-based outlier detector.

use outlier_api::IqrConfig;
use outlier_spi::{Bounds, DetectionMethod, OutlierDetector, OutlierResult, Result};
use serde::{Deserialize, Serialize};

use crate::stats;

/// Tukey fences `[Q1 - k * IQR, Q3 + k * IQR]` of a column.
pub fn iqr_bounds(column: &str, values: &[f64], multiplier: f64) -> Result<Bounds> {
    fences(column, values, multiplier).map(|(bounds, _)| bounds)
}

fn fences(column: &str, values: &[f64], multiplier: f64) -> Result<(Bounds, f64)> {
    IqrConfig::new(multiplier).validate()?;
    let (q1, q3) = stats::quartiles(column, values)?;
    let iqr = q3 - q1;
    let bounds = Bounds::new(q1 - multiplier * iqr, q3 + multiplier * iqr);
    tracing::debug!(
        column,
        q1,
        q3,
        lower = bounds.lower,
        upper = bounds.upper,
        "computed iqr bounds"
    );
    Ok((bounds, iqr))
}

/// Interquartile Range (IQR) based outlier detector.
///
/// Detects outliers with the box-plot rule: a value is an outlier when it
/// lies strictly below `Q1 - k * IQR` or strictly above `Q3 + k * IQR`.
///
/// @algorithm IQR
/// @category StatisticalDetector
/// @complexity O(n log n)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IqrDetector {
    multiplier: f64,
}

impl IqrDetector {
    /// Create a new IQR detector
    ///
    /// # Arguments
    ///
    /// * `multiplier` - IQR multiplier for outlier bounds (typically 1.5)
    pub fn new(multiplier: f64) -> Result<Self> {
        Self::from_config(IqrConfig::new(multiplier))
    }

    /// Create from configuration.
    pub fn from_config(config: IqrConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            multiplier: config.multiplier,
        })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for IqrDetector {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

/// Distance beyond the violated fence, in IQR units. A zero IQR leaves the
/// distance in the column's own units.
fn fence_score(x: f64, bounds: &Bounds, iqr: f64) -> f64 {
    let distance = if x < bounds.lower {
        bounds.lower - x
    } else if x > bounds.upper {
        x - bounds.upper
    } else {
        return 0.0;
    };
    if iqr > 0.0 {
        distance / iqr
    } else {
        distance
    }
}

impl OutlierDetector for IqrDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Iqr
    }

    fn detect(&self, column: &str, values: &[f64]) -> Result<OutlierResult> {
        let (bounds, iqr) = fences(column, values, self.multiplier)?;
        let is_outlier = values.iter().map(|&x| !bounds.contains(x)).collect();
        let scores = values.iter().map(|&x| fence_score(x, &bounds, iqr)).collect();

        Ok(OutlierResult {
            column: column.to_string(),
            method: DetectionMethod::Iqr,
            is_outlier,
            scores,
            threshold: self.multiplier,
            bounds: Some(bounds),
        })
    }

    fn score(&self, column: &str, values: &[f64]) -> Result<Vec<f64>> {
        let (bounds, iqr) = fences(column, values, self.multiplier)?;
        Ok(values.iter().map(|&x| fence_score(x, &bounds, iqr)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlier_spi::OutlierError;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_reference_column_bounds() {
        let bounds = iqr_bounds("x", &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();
        assert!((bounds.lower - (2.25 - 3.75)).abs() < EPS);
        assert!((bounds.upper - 8.5).abs() < EPS);
    }

    #[test]
    fn test_reference_column_flags_only_100() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let result = IqrDetector::default().detect("x", &data).unwrap();
        assert_eq!(result.outlier_indices(), vec![5]);
        assert_eq!(result.method, DetectionMethod::Iqr);
        assert!(result.scores[..5].iter().all(|&s| s == 0.0));
        // (100 - 8.5) / 2.5
        assert!((result.scores[5] - 36.6).abs() < EPS);
    }

    #[test]
    fn test_values_on_fence_are_not_outliers() {
        // Q1 = 2, Q3 = 4, IQR = 2, upper fence = 7
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 2.0, 4.0, 3.0, 7.0];
        let bounds = iqr_bounds("x", &data, 1.5).unwrap();
        let result = IqrDetector::default().detect("x", &data).unwrap();
        assert!((bounds.upper - 7.0).abs() < EPS);
        assert!(!result.is_outlier[8]);
    }

    #[test]
    fn test_low_outlier() {
        let data = [-50.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        let result = IqrDetector::default().detect("x", &data).unwrap();
        assert_eq!(result.outlier_indices(), vec![0]);
    }

    #[test]
    fn test_larger_multiplier_flags_fewer() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 9.0, 15.0];
        let narrow = IqrDetector::new(0.5).unwrap().detect("x", &data).unwrap();
        let wide = IqrDetector::new(3.0).unwrap().detect("x", &data).unwrap();
        assert!(wide.outlier_count() <= narrow.outlier_count());
    }

    #[test]
    fn test_recomputing_bounds_is_deterministic() {
        let data = [3.3, 1.2, 8.8, 4.1, 2.9, 30.0, 5.5];
        let a = iqr_bounds("x", &data, 1.5).unwrap();
        let b = iqr_bounds("x", &data, 1.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_column_is_insufficient_data() {
        let err = IqrDetector::default().detect("empty", &[]).unwrap_err();
        assert!(matches!(err, OutlierError::InsufficientData { .. }));
    }

    #[test]
    fn test_invalid_multiplier() {
        assert!(IqrDetector::new(-1.0).is_err());
        assert!(iqr_bounds("x", &[1.0], 0.0).is_err());
    }
}
