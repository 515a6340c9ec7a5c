//! One-hot encoding of categorical columns.

use std::collections::BTreeSet;

use pipeline_spi::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Encodes a categorical column as one 0/1 indicator column per category.
///
/// Categories are learned by [`fit`](Self::fit) and kept in sorted order, so
/// the output layout does not depend on row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    column: String,
    categories: Vec<String>,
}

impl OneHotEncoder {
    pub fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
            categories: Vec::new(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_fitted(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Learn the distinct categories of `values`.
    pub fn fit(&mut self, values: &[String]) -> Result<()> {
        if values.is_empty() {
            return Err(PipelineError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        let distinct: BTreeSet<&String> = values.iter().collect();
        self.categories = distinct.into_iter().cloned().collect();
        tracing::debug!(
            column = %self.column,
            categories = self.categories.len(),
            "fitted one-hot encoder"
        );
        Ok(())
    }

    /// Output column names, `<column>_<category>`.
    pub fn feature_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", self.column, c))
            .collect()
    }

    /// One indicator vector per category, each as long as `values`.
    pub fn transform(&self, values: &[String]) -> Result<Vec<Vec<f64>>> {
        if !self.is_fitted() {
            return Err(PipelineError::TransformError(format!(
                "encoder for column '{}' is not fitted",
                self.column
            )));
        }
        let mut encoded = vec![vec![0.0; values.len()]; self.categories.len()];
        for (row, value) in values.iter().enumerate() {
            let index = self
                .categories
                .binary_search(value)
                .map_err(|_| PipelineError::UnknownCategory {
                    column: self.column.clone(),
                    category: value.clone(),
                })?;
            encoded[index][row] = 1.0;
        }
        Ok(encoded)
    }

    pub fn fit_transform(&mut self, values: &[String]) -> Result<Vec<Vec<f64>>> {
        self.fit(values)?;
        self.transform(values)
    }
}
