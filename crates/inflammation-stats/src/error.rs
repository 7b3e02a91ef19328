//! Error types for table statistics.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Inflammation readings must not be negative.
    #[error("inflammation values should not be negative (row {row}, column {column}: {value})")]
    InvalidMeasurement { row: usize, column: usize, value: f64 },

    /// A row does not have as many values as the table has columns.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;
