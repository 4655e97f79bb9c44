//! Generic service: DTO-facing CRUD over one repository.

use chrono::Utc;
use domain::models::{ActiveDto, Identified};
use persistence::repositories::CrudRepository;
use persistence::{Entity, EntityId, MergeFrom};
use std::marker::PhantomData;

use crate::error::ServiceError;

/// Translates between `TDto` and `TEntity` around a repository.
pub struct Service<TDto, TEntity, R> {
    repository: R,
    _types: PhantomData<fn() -> (TDto, TEntity)>,
}

impl<TDto, TEntity, R: Clone> Clone for Service<TDto, TEntity, R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            _types: PhantomData,
        }
    }
}

/// Stamps the creation timestamp on entities that carry one.
fn stamp_creation<T: Entity>(entity: &mut T) {
    if let Some(stamped) = entity.as_timestamped_mut() {
        stamped.set_created_at(Utc::now());
    }
}

impl<TDto, TEntity, R> Service<TDto, TEntity, R>
where
    TDto: From<TEntity> + Send + 'static,
    TEntity: Entity + From<TDto>,
    R: CrudRepository<TEntity>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _types: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn get_all(&self) -> Result<Vec<TDto>, ServiceError> {
        let rows = self.repository.get_all().await?;
        Ok(rows.into_iter().map(TDto::from).collect())
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<TDto>, ServiceError> {
        Ok(self.repository.get_by_id(id).await?.map(TDto::from))
    }

    /// Inserts a new row and returns it with its assigned key.
    ///
    /// Timestamped entities get the current time as their creation date,
    /// whatever the DTO carried.
    pub async fn add(&self, dto: TDto) -> Result<TDto, ServiceError> {
        let mut entity = TEntity::from(dto);
        stamp_creation(&mut entity);

        let created = self.repository.create(entity).await?;
        tracing::info!(entity = TEntity::TABLE, id = created.id(), "Created row");
        Ok(TDto::from(created))
    }

    pub async fn update(&self, dto: TDto) -> Result<(), ServiceError> {
        let entity = TEntity::from(dto);
        let id = entity.id();
        self.repository.update(entity).await?;
        tracing::debug!(entity = TEntity::TABLE, id = id, "Updated row");
        Ok(())
    }

    /// Deletes the row; unknown keys are ignored.
    pub async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        if self.repository.get_by_id(id).await?.is_none() {
            tracing::debug!(entity = TEntity::TABLE, id = id, "Delete of unknown row");
        }
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Applies the desired active flag; `false` means nothing was changed.
    pub async fn set_active<A: ActiveDto>(&self, dto: A) -> bool {
        self.repository.set_active(dto.id(), dto.active()).await
    }

    /// Applies the fields present in an update view onto the stored row.
    ///
    /// Absent fields keep their stored value.
    pub async fn merge<U>(&self, dto: U) -> Result<TDto, ServiceError>
    where
        U: Identified + Send,
        TEntity: MergeFrom<U>,
    {
        let id = dto.id();
        let mut entity = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound {
                entity: TEntity::TABLE,
                id,
            })?;

        entity.merge_from(dto);
        self.repository.update(entity.clone()).await?;
        Ok(TDto::from(entity))
    }
}
