//! Generic repository: CRUD and activation over one entity type.

use async_trait::async_trait;
use std::marker::PhantomData;

use crate::entity::{Entity, EntityId, ACTIVE_COLUMN};
use crate::session::Session;
use crate::store::{ChangeSet, PgStore, Store, StoreError};

/// Operations every repository offers to the service layer.
#[async_trait]
pub trait CrudRepository<T: Entity>: Send + Sync {
    /// Every row, no filtering.
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// Single-row lookup; `None` when the key is unknown.
    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, StoreError>;

    /// Inserts the row and returns it carrying its assigned key.
    async fn create(&self, entity: T) -> Result<T, StoreError>;

    /// Rewrites an existing row. A missing row fails with [`StoreError::NotFound`].
    async fn update(&self, entity: T) -> Result<(), StoreError>;

    /// Removes the row; a missing row is a no-op.
    async fn delete(&self, id: EntityId) -> Result<(), StoreError>;

    /// Sets the active flag.
    ///
    /// Returns `false` when the row is missing, when the entity is not
    /// activable, or when the store fails; failures are logged, not returned.
    async fn set_active(&self, id: EntityId, active: bool) -> bool;
}

/// Repository over one entity type, bound to a request session.
pub struct Repository<T, S = PgStore> {
    session: Session<S>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S> Clone for Repository<T, S> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity, S: Store> Repository<T, S> {
    /// Creates a new repository on the request session.
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    async fn try_set_active(&self, id: EntityId, active: bool) -> Result<bool, StoreError> {
        let Some(mut row) = self.session.find_by_id::<T>(id).await? else {
            return Ok(false);
        };
        match row.as_activable_mut() {
            Some(activable) => activable.set_active(active),
            None => return Ok(false),
        }

        self.session
            .save_changes(ChangeSet::new().update_columns(row, &[ACTIVE_COLUMN]))
            .await?;
        Ok(true)
    }
}

#[async_trait]
impl<T: Entity, S: Store> CrudRepository<T> for Repository<T, S> {
    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        self.session.find_all().await
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, StoreError> {
        self.session.find_by_id(id).await
    }

    async fn create(&self, entity: T) -> Result<T, StoreError> {
        let inserted = self
            .session
            .save_changes(ChangeSet::new().insert(entity))
            .await?;
        inserted
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Unavailable(format!("{} insert returned no row", T::TABLE)))
    }

    async fn update(&self, entity: T) -> Result<(), StoreError> {
        self.session
            .save_changes(ChangeSet::new().update(entity))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        if self.session.find_by_id::<T>(id).await?.is_none() {
            return Ok(());
        }
        self.session
            .save_changes(ChangeSet::<T>::new().delete(id))
            .await?;
        Ok(())
    }

    async fn set_active(&self, id: EntityId, active: bool) -> bool {
        match self.try_set_active(id, active).await {
            Ok(changed) => changed,
            Err(e) => {
                tracing::error!(
                    entity = T::TABLE,
                    id = id,
                    error = %e,
                    "Failed to change active state"
                );
                false
            }
        }
    }
}
