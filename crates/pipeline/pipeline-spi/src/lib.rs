//! Pipeline Service Provider Interface
//!
//! Defines traits and types for feature preparation pipelines.

mod error;
mod frame;

pub use error::{PipelineError, Result};
pub use frame::FeatureFrame;

/// Common trait for pipeline transformation steps
pub trait PipelineStep: Send + Sync {
    /// Fit the step to data (learn parameters)
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Transform data forward
    fn transform(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Inverse transform (undo the transformation)
    fn inverse_transform(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Name of this step
    fn name(&self) -> &str;
}
