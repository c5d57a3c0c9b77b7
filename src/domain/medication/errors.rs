//! Medication-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, MedicationId, ValidationError};

/// Medication-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedicationError {
    /// Medication was not found.
    NotFound(MedicationId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// The store is unreachable or not configured.
    StoreUnavailable(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl MedicationError {
    pub fn not_found(id: MedicationId) -> Self {
        MedicationError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MedicationError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            MedicationError::NotFound(_) => ErrorCode::MedicationNotFound,
            MedicationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MedicationError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            MedicationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            MedicationError::NotFound(id) => format!("Medication not found: {}", id),
            MedicationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            MedicationError::StoreUnavailable(msg) => format!("Store unavailable: {}", msg),
            MedicationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for MedicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MedicationError {}

impl From<ValidationError> for MedicationError {
    fn from(err: ValidationError) -> Self {
        MedicationError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for MedicationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => MedicationError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::StoreUnavailable => MedicationError::StoreUnavailable(err.message),
            _ => MedicationError::Infrastructure(err.to_string()),
        }
    }
}
