//! Data models for tabular datasets.

mod column;
mod dataset;
mod schema;

pub use column::{Column, ColumnData};
pub use dataset::Dataset;
pub use schema::{ColumnKind, ColumnSpec, Schema};
