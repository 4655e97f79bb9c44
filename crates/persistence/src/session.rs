//! Per-request store session.
//!
//! A session is opened once per inbound request and handed to every
//! repository constructed for that request. It is never reused across
//! requests. Each `save_changes` call is its own atomic commit.

use std::sync::Arc;
use uuid::Uuid;

use crate::entity::{Entity, EntityId};
use crate::store::{ChangeSet, Filter, PgStore, Store, StoreError};

/// Request-scoped handle on a store.
pub struct Session<S = PgStore> {
    id: Uuid,
    store: Arc<S>,
}

impl<S> Clone for Session<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> Session<S> {
    /// Opens a new session on a shared store.
    pub fn open(store: Arc<S>) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, "Opened store session");
        Self { id, store }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn find_all<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
        self.store.find_all().await
    }

    pub async fn find_by_id<T: Entity>(&self, id: EntityId) -> Result<Option<T>, StoreError> {
        self.store.find_by_id(id).await
    }

    pub async fn find_first<T: Entity>(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        self.store.find_first(filter).await
    }

    /// Commits the staged changes and waits for the store to acknowledge them.
    ///
    /// Returns the inserted rows with their assigned keys.
    pub async fn save_changes<T: Entity>(
        &self,
        changes: ChangeSet<T>,
    ) -> Result<Vec<T>, StoreError> {
        if changes.is_empty() {
            return Ok(Vec::new());
        }

        let staged = changes.len();
        match self.store.commit(changes).await {
            Ok(inserted) => {
                tracing::debug!(
                    session_id = %self.id,
                    table = T::TABLE,
                    changes = staged,
                    "Committed changes"
                );
                Ok(inserted)
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %self.id,
                    table = T::TABLE,
                    changes = staged,
                    error = %e,
                    "Commit failed"
                );
                Err(e)
            }
        }
    }
}
