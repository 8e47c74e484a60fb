use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::SerializationError(err.to_string())
    }
}

pub type AuditResult<T> = Result<T, AuditError>;
