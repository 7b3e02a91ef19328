//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The serializer has no storage encoding.
    #[error("{serializer} does not support {operation}")]
    UnsupportedOperation {
        operation: &'static str,
        serializer: &'static str,
    },

    /// A record is missing a required field or has a field of the wrong type.
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// JSON has no representation for NaN or infinite readings.
    #[error("Patient '{patient}' has a non-finite value in observation {observation} (day {day})")]
    NonFiniteValue {
        patient: String,
        observation: usize,
        day: u32,
    },

    /// The stored text could not be decoded.
    #[error("Invalid patient file format: {path}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// Encoding the records failed.
    #[error("Failed to serialize patient records")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Writing the temp file succeeded but replacing the target did not.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::UnsupportedOperation {
                operation,
                serializer,
            } => {
                format!("{serializer} has no storage format, so it cannot {operation} patients.")
            }
            Self::MalformedRecord { index, reason } => {
                format!("Patient record {} is invalid: {}", index + 1, reason)
            }
            Self::NonFiniteValue {
                patient,
                observation,
                day,
            } => {
                format!(
                    "Observation {} (day {}) of patient '{}' is not a finite number and cannot be saved.",
                    observation + 1,
                    day,
                    patient
                )
            }
            Self::InvalidFormat { path, reason } => {
                format!(
                    "The file at {} is not a valid patient file: {}",
                    path.display(),
                    reason
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while encoding the patient records.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::UnsupportedOperation { .. } => {
                Some("Use a serializer with a storage format, such as PatientJsonSerializer.".into())
            }
            Self::MalformedRecord { .. } => Some(
                "Each record needs 'name' and 'observations', and each observation needs 'day' and 'value'."
                    .into(),
            ),
            Self::NonFiniteValue { .. } => {
                Some("Replace NaN or infinite readings with a measured value before saving.".into())
            }
            Self::InvalidFormat { .. } => {
                Some("Make sure you selected a JSON file saved by this tool.".into())
            }
            Self::Serialization { .. } => None,
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operation_display() {
        let err = PersistenceError::UnsupportedOperation {
            operation: "save",
            serializer: "PatientSerializer",
        };
        assert_eq!(err.to_string(), "PatientSerializer does not support save");
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn malformed_record_user_message_is_one_based() {
        let err = PersistenceError::MalformedRecord {
            index: 0,
            reason: "missing field `name`".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Patient record 1 is invalid: missing field `name`"
        );
    }
}
