//! Dose-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised while reading or recording doses.
///
/// A missing dose event is never an error: it means `Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoseError {
    /// Validation failed on the inbound request.
    ValidationFailed { field: String, message: String },
    /// The store is unreachable or not configured.
    StoreUnavailable(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl DoseError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DoseError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        DoseError::StoreUnavailable(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DoseError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DoseError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            DoseError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DoseError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DoseError::StoreUnavailable(msg) => format!("Store unavailable: {}", msg),
            DoseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DoseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DoseError {}

impl From<ValidationError> for DoseError {
    fn from(err: ValidationError) -> Self {
        DoseError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for DoseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::StoreUnavailable => DoseError::StoreUnavailable(err.message),
            ErrorCode::ValidationFailed => DoseError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => DoseError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_unavailable_maps_from_domain_error() {
        let err: DoseError = DomainError::store_unavailable("Database not configured").into();
        assert_eq!(err, DoseError::store_unavailable("Database not configured"));
        assert_eq!(err.code(), ErrorCode::StoreUnavailable);
    }

    #[test]
    fn other_domain_errors_become_infrastructure() {
        let err: DoseError = DomainError::new(ErrorCode::DatabaseError, "boom").into();
        assert!(matches!(err, DoseError::Infrastructure(_)));
    }
}
