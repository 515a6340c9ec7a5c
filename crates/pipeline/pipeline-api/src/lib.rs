//! Pipeline step implementations
//!
//! This crate provides the numeric scaling steps and dataset-level feature
//! preparation:
//!
//! - [`NormalizeStep`]: Normalize data to [0, 1] range
//! - [`StandardizeStep`]: Standardize to zero mean, unit variance
//! - [`FeaturePreparer`]: Scale numeric and one-hot encode categorical columns

mod features;
mod normalize;
mod standardize;

/// Spreads at or below this are treated as a constant column.
const ZERO_SPREAD: f64 = 1e-12;

// Re-export from core
pub use pipeline_core::{FeatureFrame, OneHotEncoder, Pipeline, PipelineError, Result};

// Re-export traits from SPI
pub use pipeline_spi::PipelineStep;

// Re-export implementations
pub use features::{FeaturePreparer, ScalerKind};
pub use normalize::NormalizeStep;
pub use standardize::StandardizeStep;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::PipelineStep;
    pub use crate::{FeaturePreparer, NormalizeStep, OneHotEncoder, ScalerKind, StandardizeStep};
    pub use crate::{FeatureFrame, Pipeline, PipelineError, Result};
}

fn check_not_empty(data: &[f64]) -> Result<()> {
    if data.is_empty() {
        return Err(PipelineError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}
