use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The patient has no observations to report.
    #[error("patient '{patient}' has no observations")]
    EmptyHistory { patient: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
