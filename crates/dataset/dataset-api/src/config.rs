//! Synthetic dataset configuration types.

use dataset_spi::{DatasetError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the seeded synthetic student dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of records to generate (default: 500).
    pub rows: usize,
    /// RNG seed; the same seed always yields the same dataset (default: 42).
    pub seed: u64,
    /// Fraction of rows that receive an injected extreme value (default: 0.02).
    pub outlier_fraction: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            rows: 500,
            seed: 42,
            outlier_fraction: 0.02,
        }
    }
}

impl SyntheticConfig {
    pub fn new(rows: usize, seed: u64) -> Self {
        Self {
            rows,
            seed,
            ..Self::default()
        }
    }

    /// Check the configuration before generating anything.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(DatasetError::InvalidParameter {
                name: "rows".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !(0.0..1.0).contains(&self.outlier_fraction) {
            return Err(DatasetError::InvalidParameter {
                name: "outlier_fraction".to_string(),
                reason: "must be in [0, 1)".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for SyntheticConfig.
#[derive(Debug, Default)]
pub struct SyntheticConfigBuilder {
    rows: Option<usize>,
    seed: Option<u64>,
    outlier_fraction: Option<f64>,
}

impl SyntheticConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the injected outlier fraction.
    pub fn outlier_fraction(mut self, fraction: f64) -> Self {
        self.outlier_fraction = Some(fraction);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<SyntheticConfig> {
        let defaults = SyntheticConfig::default();
        let config = SyntheticConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            seed: self.seed.unwrap_or(defaults.seed),
            outlier_fraction: self.outlier_fraction.unwrap_or(defaults.outlier_fraction),
        };
        config.validate()?;
        Ok(config)
    }
}
