//! Columnar dataset.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::column::{Column, ColumnData};
use super::schema::{ColumnKind, ColumnSpec, Schema};
use crate::error::{DatasetError, Result};

/// Table of equally long, uniquely named columns aligned by row index.
///
/// A dataset is never mutated once built. Operations that change values
/// return a new dataset and leave the receiver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Build a dataset, checking that names are unique and lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(DatasetError::DuplicateColumn(column.name().to_string()));
            }
            if column.len() != n_rows {
                return Err(DatasetError::LengthMismatch {
                    column: column.name().to_string(),
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Values of a numeric column.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        let column = self
            .column(name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))?;
        column.as_numeric().ok_or_else(|| DatasetError::TypeMismatch {
            column: name.to_string(),
            expected: ColumnKind::Numeric.to_string(),
        })
    }

    /// Values of a categorical column.
    pub fn categorical(&self, name: &str) -> Result<&[String]> {
        let column = self
            .column(name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))?;
        column.as_categorical().ok_or_else(|| DatasetError::TypeMismatch {
            column: name.to_string(),
            expected: ColumnKind::Categorical.to_string(),
        })
    }

    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.names_of(ColumnKind::Numeric)
    }

    pub fn categorical_column_names(&self) -> Vec<&str> {
        self.names_of(ColumnKind::Categorical)
    }

    fn names_of(&self, kind: ColumnKind) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.kind() == kind)
            .map(Column::name)
            .collect()
    }

    /// Schema describing this dataset's columns.
    pub fn schema(&self) -> Schema {
        let specs = self
            .columns
            .iter()
            .map(|c| ColumnSpec {
                name: c.name().to_string(),
                kind: c.kind(),
            })
            .collect();
        // Names are unique by construction.
        Schema { columns: specs }
    }

    /// Check that every column of `schema` is present with the right kind.
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        for spec in schema.columns() {
            match self.column(&spec.name) {
                None => {
                    return Err(DatasetError::SchemaMismatch(format!(
                        "missing column '{}'",
                        spec.name
                    )))
                }
                Some(column) if column.kind() != spec.kind => {
                    return Err(DatasetError::SchemaMismatch(format!(
                        "column '{}' is {}, expected {}",
                        spec.name,
                        column.kind(),
                        spec.kind
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Copy of this dataset with one numeric column's values replaced.
    pub fn with_numeric(&self, name: &str, values: Vec<f64>) -> Result<Self> {
        // Type check before cloning anything.
        self.numeric(name)?;
        if values.len() != self.n_rows {
            return Err(DatasetError::LengthMismatch {
                column: name.to_string(),
                expected: self.n_rows,
                actual: values.len(),
            });
        }

        let mut values = Some(values);
        let columns = self
            .columns
            .iter()
            .map(|c| {
                if c.name() == name {
                    Column::new(name, ColumnData::Numeric(values.take().unwrap_or_default()))
                } else {
                    c.clone()
                }
            })
            .collect();

        Ok(Self {
            columns,
            n_rows: self.n_rows,
        })
    }
}
