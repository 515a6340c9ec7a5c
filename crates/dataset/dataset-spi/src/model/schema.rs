//! Column schema types.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

/// Kind of values a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Name and kind of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn numeric(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ColumnKind::Numeric,
        }
    }

    pub fn categorical(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ColumnKind::Categorical,
        }
    }
}

/// Ordered set of column specs with unique names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub(crate) columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Create a schema, rejecting duplicate column names.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &columns {
            if !seen.insert(spec.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(spec.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column spec by name.
    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of the columns of the given kind, in schema order.
    pub fn names_of(&self, kind: ColumnKind) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_rejects_duplicates() {
        let result = Schema::new(vec![ColumnSpec::numeric("Age"), ColumnSpec::categorical("Age")]);
        assert_eq!(result.unwrap_err(), DatasetError::DuplicateColumn("Age".to_string()));
    }

    #[test]
    fn test_names_of_kind() {
        let schema = Schema::new(vec![
            ColumnSpec::numeric("Age"),
            ColumnSpec::categorical("Gender"),
            ColumnSpec::numeric("GPA"),
        ])
        .unwrap();

        assert_eq!(schema.names_of(ColumnKind::Numeric), vec!["Age", "GPA"]);
        assert_eq!(schema.names_of(ColumnKind::Categorical), vec!["Gender"]);
        assert_eq!(schema.get("GPA").unwrap().kind, ColumnKind::Numeric);
        assert!(schema.get("Major").is_none());
    }
}
