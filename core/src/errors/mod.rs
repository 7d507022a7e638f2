//! Domain error types shared by repositories and services.

use thiserror::Error;

/// Core domain errors
///
/// Every data access operation reports failure through this type. Absence of a
/// record is not an error: lookups return `Ok(None)` and callers that require
/// the record convert that into [`DomainError::NotFound`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Constraint violation: {constraint}")]
    ConstraintViolation { constraint: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::not_found("User 7").to_string(),
            "Resource not found: User 7"
        );
        assert_eq!(
            DomainError::ConstraintViolation {
                constraint: "users_email_key".to_string()
            }
            .to_string(),
            "Constraint violation: users_email_key"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(DomainError::not_found("User").is_not_found());
        assert!(!DomainError::validation("bad").is_not_found());
        assert!(DomainError::ConstraintViolation {
            constraint: "users_email_key".to_string()
        }
        .is_constraint_violation());
    }
}
