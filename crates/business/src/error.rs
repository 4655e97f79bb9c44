use persistence::{EntityId, StoreError};
use thiserror::Error;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A business rule rejected the request.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field-level constraints on the incoming DTO failed.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Whether the caller sent something the service refused, as opposed to
    /// the store failing underneath it. A unique conflict counts as refused.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            ServiceError::Store(StoreError::NotFound { .. })
                | ServiceError::Store(StoreError::UnknownColumn { .. })
                | ServiceError::Store(StoreError::Database(_))
                | ServiceError::Store(StoreError::Unavailable(_))
        )
    }
}
