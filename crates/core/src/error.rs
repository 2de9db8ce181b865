use crate::types::DbId;

/// Domain error taxonomy shared by the storage and API layers.
///
/// `Validation` covers missing/malformed mandatory input, `NotFound` a
/// referenced volunteer/elderly/booking that does not exist, `Conflict` a
/// uniqueness violation surfaced during registration, and `Internal`
/// everything unexpected (reported to callers with a sanitized message).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
