//! Person repository: generic CRUD plus document lookup and the name patch.

use async_trait::async_trait;
use domain::models::PersonUpdateDto;

use crate::entities::PersonEntity;
use crate::entity::EntityId;
use crate::repositories::repository::{CrudRepository, Repository};
use crate::session::Session;
use crate::store::{ChangeSet, Filter, PgStore, Store, StoreError};

/// Repository for person records.
pub struct PersonRepository<S = PgStore> {
    inner: Repository<PersonEntity, S>,
}

impl<S> Clone for PersonRepository<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Store> PersonRepository<S> {
    pub fn new(session: Session<S>) -> Self {
        Self {
            inner: Repository::new(session),
        }
    }

    pub fn session(&self) -> &Session<S> {
        self.inner.session()
    }

    /// Finds the live person holding an identification number.
    ///
    /// Soft-deleted persons are never returned.
    pub async fn get_by_document(
        &self,
        number_identification: i64,
    ) -> Result<Option<PersonEntity>, StoreError> {
        let filter = Filter::not_deleted::<PersonEntity>()
            .eq(PersonEntity::DOCUMENT_COLUMN, number_identification);
        self.session().find_first(&filter).await
    }

    /// Overwrites the name, phone and document fields of a live person.
    ///
    /// Absent optional fields clear the stored value. Email, creation and
    /// delete timestamps are left alone. Returns `false` when no live person
    /// has the id or the store fails; failures are logged.
    pub async fn patch_person(&self, dto: PersonUpdateDto) -> bool {
        let id = dto.id;
        match self.try_patch_person(dto).await {
            Ok(patched) => patched,
            Err(e) => {
                tracing::error!(id = id, error = %e, "Failed to patch person");
                false
            }
        }
    }

    async fn try_patch_person(&self, dto: PersonUpdateDto) -> Result<bool, StoreError> {
        let filter = Filter::not_deleted::<PersonEntity>().eq("id", dto.id);
        let Some(mut person) = self.session().find_first::<PersonEntity>(&filter).await? else {
            tracing::debug!(id = dto.id, "No live person to patch");
            return Ok(false);
        };

        person.first_name = dto.first_name.unwrap_or_default();
        person.second_name = dto.second_name;
        person.first_last_name = dto.first_last_name.unwrap_or_default();
        person.second_last_name = dto.second_last_name;
        person.phone_number = dto.phone_number;
        person.number_identification = dto.number_identification;

        self.session()
            .save_changes(ChangeSet::new().update_columns(person, PersonEntity::PATCHED_COLUMNS))
            .await?;
        Ok(true)
    }
}

#[async_trait]
impl<S: Store> CrudRepository<PersonEntity> for PersonRepository<S> {
    async fn get_all(&self) -> Result<Vec<PersonEntity>, StoreError> {
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<PersonEntity>, StoreError> {
        self.inner.get_by_id(id).await
    }

    async fn create(&self, entity: PersonEntity) -> Result<PersonEntity, StoreError> {
        self.inner.create(entity).await
    }

    async fn update(&self, entity: PersonEntity) -> Result<(), StoreError> {
        self.inner.update(entity).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        self.inner.delete(id).await
    }

    async fn set_active(&self, id: EntityId, active: bool) -> bool {
        self.inner.set_active(id, active).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn setup() -> (Arc<MemoryStore>, PersonRepository<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let repo = PersonRepository::new(Session::open(Arc::clone(&store)));
        (store, repo)
    }

    fn person(number_identification: i64) -> PersonEntity {
        PersonEntity {
            id: 0,
            first_name: "Ana".to_string(),
            second_name: Some("María".to_string()),
            first_last_name: "Gómez".to_string(),
            second_last_name: Some("Ruiz".to_string()),
            phone_number: Some("3001234567".to_string()),
            number_identification,
            email: Some("ana@example.com".to_string()),
            create_date: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            delete_date: None,
        }
    }

    #[tokio::test]
    async fn test_get_by_document_finds_live_person() {
        let (store, repo) = setup();
        let seeded = store.seed(person(123)).unwrap();

        let found = repo.get_by_document(123).await.unwrap();
        assert_eq!(found, Some(seeded));
        assert!(repo.get_by_document(456).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_document_skips_soft_deleted() {
        let (store, repo) = setup();
        let mut deleted = person(123);
        deleted.delete_date = Some(Utc::now());
        store.seed(deleted).unwrap();

        assert!(repo.get_by_document(123).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_patch_overwrites_six_fields_only() {
        let (store, repo) = setup();
        let seeded = store.seed(person(123)).unwrap();

        let patched = repo
            .patch_person(PersonUpdateDto {
                id: seeded.id,
                first_name: Some("Ana2".to_string()),
                first_last_name: Some("Pérez".to_string()),
                number_identification: 124,
                email: Some("ignored@example.com".to_string()),
                ..Default::default()
            })
            .await;
        assert!(patched);
        assert_eq!(store.write_count(), 1);

        let stored = repo.get_by_id(seeded.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Ana2");
        assert_eq!(stored.first_last_name, "Pérez");
        assert_eq!(stored.second_name, None);
        assert_eq!(stored.second_last_name, None);
        assert_eq!(stored.phone_number, None);
        assert_eq!(stored.number_identification, 124);
        assert_eq!(stored.email, seeded.email);
        assert_eq!(stored.create_date, seeded.create_date);
    }

    #[tokio::test]
    async fn test_patch_missing_person_writes_nothing() {
        let (store, repo) = setup();

        let patched = repo
            .patch_person(PersonUpdateDto {
                id: 9,
                first_name: Some("Nobody".to_string()),
                ..Default::default()
            })
            .await;
        assert!(!patched);
        assert_eq!(store.commit_count(), 0);
    }

    #[tokio::test]
    async fn test_patch_soft_deleted_person_is_false() {
        let (store, repo) = setup();
        let mut deleted = person(123);
        deleted.delete_date = Some(Utc::now());
        let seeded = store.seed(deleted).unwrap();

        let patched = repo
            .patch_person(PersonUpdateDto {
                id: seeded.id,
                first_name: Some("Ana2".to_string()),
                number_identification: 123,
                ..Default::default()
            })
            .await;
        assert!(!patched);
        assert_eq!(store.commit_count(), 0);
    }

    #[tokio::test]
    async fn test_patch_store_failure_is_reported_as_false() {
        let (store, repo) = setup();
        let seeded = store.seed(person(123)).unwrap();
        store.fail_next_commit();

        let patched = repo
            .patch_person(PersonUpdateDto {
                id: seeded.id,
                first_name: Some("Ana2".to_string()),
                number_identification: 123,
                ..Default::default()
            })
            .await;
        assert!(!patched);
        assert_eq!(
            repo.get_by_id(seeded.id).await.unwrap().unwrap().first_name,
            "Ana"
        );
    }

    #[tokio::test]
    async fn test_set_active_on_person_is_false() {
        let (store, repo) = setup();
        let seeded = store.seed(person(123)).unwrap();

        assert!(!repo.set_active(seeded.id, false).await);
        assert_eq!(store.commit_count(), 0);
    }
}
