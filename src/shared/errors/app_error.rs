use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    /// One or more supplied identifiers do not resolve to an existing
    /// entity. The message enumerates every unresolved identifier, not
    /// only the first one detected.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A create or batch-create returned at least one entity without an
    /// assigned id. The message names every failed entity by its display
    /// field.
    #[error("Entity persist failure: {0}")]
    EntityPersistFailure(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Opaque store-level fault, propagated unmodified and never retried.
    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StoreError(format!("Serialization error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidParameter(format!("Invalid UUID: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
