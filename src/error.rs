//! Schema Registry errors

use thiserror::Error;

/// Schema Registry error types
///
/// The three domain kinds ([`NotFound`](SchemaError::NotFound),
/// [`AlreadyExists`](SchemaError::AlreadyExists),
/// [`InvalidFormat`](SchemaError::InvalidFormat)) are what callers dispatch
/// on. Everything else is an opaque internal failure and is never coerced
/// into a domain kind.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The requested schema ID has no stored document.
    #[error("schema not found: {0}")]
    NotFound(String),

    /// The schema ID already has a stored document; create is rejected.
    #[error("schema already exists: {0}")]
    AlreadyExists(String),

    /// The schema fails to compile, the submitted document is not valid
    /// JSON, or the document fails schema validation. The message text is
    /// what differentiates the three causes.
    #[error("{0}")]
    InvalidFormat(String),

    /// The caller-supplied schema ID is syntactically invalid.
    #[error("invalid schema ID: {0}")]
    InvalidInput(String),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SchemaError {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            SchemaError::NotFound(_) => 404,
            SchemaError::AlreadyExists(_) => 409,
            SchemaError::InvalidFormat(_) | SchemaError::InvalidInput(_) => 400,
            SchemaError::Io(_) | SchemaError::Internal(_) => 500,
        }
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(SchemaError::NotFound("x".into()).http_status(), 404);
        assert_eq!(SchemaError::AlreadyExists("x".into()).http_status(), 409);
        assert_eq!(SchemaError::InvalidFormat("bad".into()).http_status(), 400);
        assert_eq!(SchemaError::InvalidInput("a/b".into()).http_status(), 400);
        assert_eq!(SchemaError::Internal("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_messages_carry_id_only() {
        let err = SchemaError::NotFound("orders".into());
        assert_eq!(err.to_string(), "schema not found: orders");
        let err = SchemaError::AlreadyExists("orders".into());
        assert_eq!(err.to_string(), "schema already exists: orders");
    }
}
