//! Z-Score based outlier detector.

use outlier_api::ZScoreConfig;
use outlier_spi::{Bounds, DetectionMethod, OutlierDetector, OutlierResult, Result};
use serde::{Deserialize, Serialize};

use crate::stats::{self, ZERO_VARIANCE_EPSILON};

/// Z-Score based outlier detector.
///
/// A value is an outlier when `|value - mean| / std_dev` exceeds the
/// threshold. A zero-variance column has no outliers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZScoreDetector {
    threshold: f64,
    ddof: usize,
}

impl ZScoreDetector {
    /// Create a new Z-Score detector using the sample standard deviation.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Number of standard deviations beyond which a value is an outlier
    pub fn new(threshold: f64) -> Result<Self> {
        Self::from_config(ZScoreConfig::new(threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: ZScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold,
            ddof: config.ddof,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn ddof(&self) -> usize {
        self.ddof
    }

    /// Mean and standard deviation of the column. With no more values than
    /// `ddof` the spread is undefined and reported as zero.
    fn moments(&self, column: &str, values: &[f64]) -> Result<(f64, f64)> {
        let mean = stats::mean(column, values)?;
        let std_dev = if values.len() > self.ddof {
            stats::std_dev(column, values, self.ddof)?
        } else {
            0.0
        };
        Ok((mean, std_dev))
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            ddof: 1,
        }
    }
}

impl OutlierDetector for ZScoreDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::ZScore
    }

    fn detect(&self, column: &str, values: &[f64]) -> Result<OutlierResult> {
        let (mean, std_dev) = self.moments(column, values)?;
        let scores = z_scores(column, values, mean, std_dev);
        let is_outlier = scores.iter().map(|&z| z > self.threshold).collect();

        Ok(OutlierResult {
            column: column.to_string(),
            method: DetectionMethod::ZScore,
            is_outlier,
            scores,
            threshold: self.threshold,
            bounds: Some(Bounds::new(
                mean - self.threshold * std_dev,
                mean + self.threshold * std_dev,
            )),
        })
    }

    fn score(&self, column: &str, values: &[f64]) -> Result<Vec<f64>> {
        let (mean, std_dev) = self.moments(column, values)?;
        Ok(z_scores(column, values, mean, std_dev))
    }
}

fn z_scores(column: &str, values: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    if std_dev <= ZERO_VARIANCE_EPSILON {
        tracing::warn!(column, "zero variance column, no z-score outliers");
        return vec![0.0; values.len()];
    }
    tracing::debug!(column, mean, std_dev, "computed z-score moments");
    values.iter().map(|&x| (x - mean).abs() / std_dev).collect()
}
