//! Min-max scaling of a feature column.

use pipeline_spi::{PipelineStep, Result};
use serde::{Deserialize, Serialize};

use crate::{check_not_empty, ZERO_SPREAD};

/// Min-max scaler fitted on one column.
///
/// The fitted minimum maps to 0 and the maximum to 1. A column whose range
/// is below `ZERO_SPREAD` maps every value to 0.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeStep {
    min: f64,
    max: f64,
}

impl NormalizeStep {
    pub fn new() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// Fitted minimum, 0 before `fit`.
    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Default for NormalizeStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for NormalizeStep {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        check_not_empty(data)?;
        self.min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        self.max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Ok(())
    }

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        let range = self.max - self.min;
        if range <= ZERO_SPREAD {
            return Ok(vec![0.5; data.len()]);
        }
        Ok(data.iter().map(|&x| (x - self.min) / range).collect())
    }

    fn inverse_transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        let range = self.max - self.min;
        Ok(data.iter().map(|&x| x * range + self.min).collect())
    }

    fn name(&self) -> &str {
        "normalize"
    }
}
