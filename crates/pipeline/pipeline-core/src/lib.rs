//! Pipeline Core
//!
//! Core types for feature pipelines: step composition and one-hot encoding.

mod one_hot;

pub use one_hot::OneHotEncoder;
pub use pipeline_spi::{FeatureFrame, PipelineError, PipelineStep, Result};

/// Composable transformation pipeline
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(&mut self, step: Box<dyn PipelineStep>) {
        self.steps.push(step);
    }

    pub fn with_step(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.add_step(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Fit each step on the output of the previous one.
    pub fn fit_transform(&mut self, data: &[f64]) -> Result<Vec<f64>> {
        let mut result = data.to_vec();
        for step in &mut self.steps {
            step.fit(&result)?;
            result = step.transform(&result)?;
            tracing::debug!(step = step.name(), len = result.len(), "fitted pipeline step");
        }
        Ok(result)
    }

    /// Apply already fitted steps to new data.
    pub fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        let mut result = data.to_vec();
        for step in &self.steps {
            result = step.transform(&result)?;
        }
        Ok(result)
    }

    pub fn inverse_transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        let mut result = data.to_vec();
        for step in self.steps.iter().rev() {
            result = step.inverse_transform(&result)?;
        }
        Ok(result)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
