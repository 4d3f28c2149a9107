//! Shared error taxonomy.
//!
//! Repositories and handlers map every failure into one of these variants;
//! the HTTP layer translates them into status codes and stable error codes.

use crate::types::DbId;

/// Convenience alias for fallible domain operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "flight",
            id: 42,
        };
        assert_eq!(err.to_string(), "flight with id 42 not found");
    }

    #[test]
    fn validation_carries_message() {
        let err = CoreError::Validation("rows must be positive".to_string());
        assert_eq!(err.to_string(), "Validation failed: rows must be positive");
    }
}
