//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an inflammation table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The input contains no rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A cell is not a number. `line` and `column` are 1-based.
    #[error("invalid number '{value}' at line {line}, column {column} in {path}")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
    },

    /// A row has a different number of cells than the first row.
    #[error("line {line} in {path} has {found} values, expected {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_invalid_number_display() {
        let err = IngestError::InvalidNumber {
            path: PathBuf::from("data.csv"),
            line: 2,
            column: 5,
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid number 'abc' at line 2, column 5 in data.csv"
        );
    }
}
