//! Contracts implemented by dataset providers.

mod data_source;

pub use data_source::DataSource;
