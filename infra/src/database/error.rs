//! Mapping from SQLx failures to domain errors

use lb_core::errors::DomainError;

/// Classify a failed statement
///
/// Constraint violations keep the constraint name so callers can tell a
/// duplicate email from a broken connection.
pub(crate) fn map_query_error(context: &str, err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db)
            if db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation() =>
        {
            DomainError::ConstraintViolation {
                constraint: db.constraint().unwrap_or("unknown").to_string(),
            }
        }
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => DomainError::Internal {
            message: format!("{}: {}", context, err),
        },
        _ => DomainError::QueryFailed {
            message: format!("{}: {}", context, err),
        },
    }
}

/// Wrap a row decoding failure
pub(crate) fn decode_error(column: &str, err: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to get {}: {}", column, err),
    }
}
