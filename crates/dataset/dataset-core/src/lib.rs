//! Dataset Core
//!
//! Implementations of dataset sources: the typed student schema, a seeded
//! synthetic generator, and CSV loading/saving.

mod csv_io;
mod student;
mod synthetic;

pub use csv_io::{write_csv, CsvSource};
pub use student::{
    student_schema, NumericField, StudentRecord, CATEGORICAL_COLUMNS, NUMERIC_COLUMNS,
};
pub use synthetic::SyntheticStudentSource;
