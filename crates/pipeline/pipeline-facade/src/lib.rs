//! Pipeline Facade
//!
//! High-level, simplified API for feature preparation pipelines.

// Re-export everything from pipeline-api
pub use pipeline_api::*;

// Re-export prelude for convenience
pub use pipeline_api::prelude;
