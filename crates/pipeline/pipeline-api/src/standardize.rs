//! Z-score scaling for the prepared feature frame.

use pipeline_spi::{PipelineStep, Result};
use serde::{Deserialize, Serialize};

use crate::{check_not_empty, ZERO_SPREAD};

/// Centers a column on its fitted mean and divides by the population std.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardizeStep {
    mean: f64,
    std_dev: f64,
}

impl StandardizeStep {
    pub fn new() -> Self {
        Self { mean: 0.0, std_dev: 1.0 }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Default for StandardizeStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for StandardizeStep {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        check_not_empty(data)?;
        let n = data.len() as f64;
        self.mean = data.iter().sum::<f64>() / n;
        self.std_dev = (data.iter().map(|x| (x - self.mean).powi(2)).sum::<f64>() / n).sqrt();
        Ok(())
    }

    /// Zeros when the fitted column was constant.
    fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        if self.std_dev <= ZERO_SPREAD {
            return Ok(vec![0.0; data.len()]);
        }
        Ok(data.iter().map(|&x| (x - self.mean) / self.std_dev).collect())
    }

    fn inverse_transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        Ok(data.iter().map(|&x| x * self.std_dev + self.mean).collect())
    }

    fn name(&self) -> &str {
        "standardize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline_spi::PipelineError;

    #[test]
    fn test_zero_mean_unit_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let mut step = StandardizeStep::new();
        step.fit(&data).unwrap();

        assert_eq!(step.mean(), 5.0);
        assert_eq!(step.std_dev(), 2.0);
        let out = step.transform(&data).unwrap();
        assert_eq!(out[0], -1.5);
        assert_eq!(out[7], 2.0);
    }

    #[test]
    fn test_constant_column_maps_to_zeros() {
        let mut step = StandardizeStep::new();
        step.fit(&[0.1, 0.1, 0.1]).unwrap();
        assert_eq!(step.transform(&[0.1, 0.1, 0.1]).unwrap(), vec![0.0; 3]);
    }

    #[test]
    fn test_fit_empty_fails() {
        let err = StandardizeStep::new().fit(&[]).unwrap_err();
        assert!(matches!(err, PipelineError::InsufficientData { .. }));
    }

    #[test]
    fn test_inverse_recovers_input() {
        let data = [3.0, 1.5, 8.25, -2.0];
        let mut step = StandardizeStep::new();
        step.fit(&data).unwrap();
        let back = step.inverse_transform(&step.transform(&data).unwrap()).unwrap();
        for (a, b) in data.iter().zip(&back) {
            assert!((a - b).abs() < 1e-9);
        }
    }
}
