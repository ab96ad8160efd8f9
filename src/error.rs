//! Error types for proforma computation and schedule/scenario loading

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProformaError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Invalid fee schedule: {0}")]
    Schedule(String),

    #[error("Unknown unit type: {0}")]
    UnknownUnitType(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProformaError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ProformaError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProformaError>;
