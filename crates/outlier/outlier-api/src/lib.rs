//! Outlier Detection API
//!
//! Configuration types for outlier detection and treatment.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use outlier_spi::{
    Bounds, ColumnStats, DetectionMethod, OutlierError, OutlierReport, OutlierResult, Result,
};

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OutlierError::InvalidParameter {
            name: name.to_string(),
            reason: "must be positive".to_string(),
        })
    }
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Z-Score detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZScoreConfig {
    /// Z-score threshold for outlier detection (default: 3.0).
    pub threshold: f64,
    /// Delta degrees of freedom of the standard deviation: 1 for the
    /// sample estimator, 0 for the population estimator (default: 1).
    pub ddof: usize,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            ddof: 1,
        }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_ddof(mut self, ddof: usize) -> Self {
        self.ddof = ddof;
        self
    }

    pub fn validate(&self) -> Result<()> {
        positive("threshold", self.threshold)?;
        if self.ddof > 1 {
            return Err(OutlierError::InvalidParameter {
                name: "ddof".to_string(),
                reason: "must be 0 or 1".to_string(),
            });
        }
        Ok(())
    }
}

/// IQR detector and capper configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IqrConfig {
    /// IQR multiplier for outlier bounds (default: 1.5).
    pub multiplier: f64,
}

impl Default for IqrConfig {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

impl IqrConfig {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    pub fn validate(&self) -> Result<()> {
        positive("multiplier", self.multiplier)
    }
}

// ============================================================================
// Scan Configuration
// ============================================================================

/// Dataset-wide outlier scan configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    pub zscore: ZScoreConfig,
    pub iqr: IqrConfig,
    /// Columns to scan; every numeric column when unset.
    pub columns: Option<Vec<String>>,
    /// Process columns in parallel.
    pub parallel: bool,
}

impl OutlierConfig {
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.zscore.validate()?;
        self.iqr.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OutlierConfig::default();
        assert_eq!(config.zscore.threshold, 3.0);
        assert_eq!(config.zscore.ddof, 1);
        assert_eq!(config.iqr.multiplier, 1.5);
        assert!(config.columns.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        assert!(ZScoreConfig::new(0.0).validate().is_err());
        assert!(ZScoreConfig::new(-3.0).validate().is_err());
        assert!(ZScoreConfig::new(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_bad_ddof() {
        assert!(ZScoreConfig::default().with_ddof(2).validate().is_err());
        assert!(ZScoreConfig::default().with_ddof(0).validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let config = OutlierConfig {
            iqr: IqrConfig::new(0.0),
            ..OutlierConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(OutlierError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_partial_json() {
        let config: OutlierConfig =
            serde_json::from_str(r#"{"iqr": {"multiplier": 3.0}, "columns": ["GPA"]}"#).unwrap();
        assert_eq!(config.iqr.multiplier, 3.0);
        assert_eq!(config.zscore.threshold, 3.0);
        assert_eq!(config.columns, Some(vec!["GPA".to_string()]));
    }
}
