//! Data source trait definition.

use crate::error::Result;
use crate::model::Dataset;

/// Trait for sources that can produce a tabular dataset.
///
/// A synthetic generator and a file loader both satisfy this contract, so
/// the cleaning steps never care where the rows came from.
pub trait DataSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Load the full dataset.
    fn load(&self) -> Result<Dataset>;
}
