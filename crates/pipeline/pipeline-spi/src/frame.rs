//! Model-ready feature matrix.

use serde::{Deserialize, Serialize};

/// Column-major feature matrix: `columns[i]` holds the values of `names[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureFrame {
    pub names: Vec<String>,
    pub columns: Vec<Vec<f64>>,
}

impl FeatureFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.names.push(name.into());
        self.columns.push(values);
    }

    pub fn n_features(&self) -> usize {
        self.names.len()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Values of one row across all features.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[index]).collect())
    }
}
