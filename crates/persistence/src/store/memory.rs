//! Process-local store.
//!
//! Used by tests and local tooling in place of PostgreSQL. Keeps one table per
//! entity type, assigns sequential keys from 1, applies a change set to a copy
//! of the table and swaps it in only when every change succeeded. Counts
//! commits and row writes so callers can assert that nothing was persisted.

use async_trait::async_trait;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::query::{Change, ChangeSet, Filter};
use super::{Store, StoreError};
use crate::entity::{Entity, EntityId};

#[derive(Debug, Clone)]
struct Table<T> {
    next_id: EntityId,
    rows: BTreeMap<EntityId, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Entity> Table<T> {
    fn apply(&mut self, change: Change<T>, inserted: &mut Vec<T>) -> Result<(), StoreError> {
        match change {
            Change::Insert(mut row) => {
                let id = self.next_id;
                row.set_id(id);
                self.check_unique(&row)?;
                self.next_id += 1;
                self.rows.insert(id, row.clone());
                inserted.push(row);
            }
            Change::Update(row) => {
                self.write_columns(row, &T::updatable_columns())?;
            }
            Change::UpdateColumns { row, columns } => {
                self.write_columns(row, &columns)?;
            }
            Change::Delete(id) => {
                self.rows.remove(&id);
            }
        }
        Ok(())
    }

    /// Copies the named columns onto the stored row; every other column keeps its value.
    fn write_columns(&mut self, row: T, columns: &[&'static str]) -> Result<(), StoreError> {
        let mut stored = self
            .rows
            .get(&row.id())
            .cloned()
            .ok_or(StoreError::NotFound {
                table: T::TABLE,
                id: row.id(),
            })?;

        for &column in columns {
            if !T::COLUMNS.contains(&column) || !stored.copy_column(&row, column) {
                return Err(StoreError::UnknownColumn {
                    table: T::TABLE,
                    column,
                });
            }
        }

        self.check_unique(&stored)?;
        self.rows.insert(stored.id(), stored);
        Ok(())
    }

    /// Mirrors the unique indexes: non-null values of [`Entity::UNIQUE`]
    /// columns may not repeat among live rows.
    fn check_unique(&self, row: &T) -> Result<(), StoreError> {
        if !row.is_live() {
            return Ok(());
        }
        for &column in T::UNIQUE {
            let Some(value) = row.value_of(column).filter(|v| !v.is_null()) else {
                continue;
            };
            let taken = self.rows.values().any(|other| {
                other.id() != row.id()
                    && other.is_live()
                    && other.value_of(column).as_ref() == Some(&value)
            });
            if taken {
                return Err(StoreError::Conflict {
                    table: T::TABLE,
                    constraint: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// In-memory store with write accounting and failure injection.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<&'static str, Box<dyn Any + Send + Sync>>>,
    commits: AtomicUsize,
    writes: AtomicUsize,
    fail_next_commit: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<&'static str, Box<dyn Any + Send + Sync>>> {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_table<T: Entity, R>(
        &self,
        f: impl FnOnce(&mut Table<T>) -> R,
    ) -> Result<R, StoreError> {
        let mut tables = self.lock();
        let table = tables
            .entry(T::TABLE)
            .or_insert_with(|| Box::new(Table::<T>::default()))
            .downcast_mut::<Table<T>>()
            .ok_or_else(|| {
                StoreError::Unavailable(format!(
                    "table {} is registered with another row type",
                    T::TABLE
                ))
            })?;
        Ok(f(table))
    }

    /// Inserts a row directly, bypassing commit accounting and unique checks.
    ///
    /// A row with id 0 receives the next key; any other id is kept as given.
    pub fn seed<T: Entity>(&self, mut row: T) -> Result<T, StoreError> {
        self.with_table(|table: &mut Table<T>| {
            if row.id() == 0 {
                row.set_id(table.next_id);
            }
            table.next_id = table.next_id.max(row.id() + 1);
            table.rows.insert(row.id(), row.clone());
            row
        })
    }

    /// Makes the next commit fail without touching any table.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    /// Number of rows currently stored for `T`.
    pub fn row_count<T: Entity>(&self) -> usize {
        self.with_table(|table: &mut Table<T>| table.rows.len())
            .unwrap_or(0)
    }

    /// Number of successful commits.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// Number of row changes applied by successful commits.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_all<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
        self.with_table(|table: &mut Table<T>| table.rows.values().cloned().collect())
    }

    async fn find_by_id<T: Entity>(&self, id: EntityId) -> Result<Option<T>, StoreError> {
        self.with_table(|table: &mut Table<T>| table.rows.get(&id).cloned())
    }

    async fn find_first<T: Entity>(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        self.with_table(|table: &mut Table<T>| {
            table.rows.values().find(|row| filter.matches(*row)).cloned()
        })
    }

    async fn commit<T: Entity>(&self, changes: ChangeSet<T>) -> Result<Vec<T>, StoreError> {
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected commit failure".to_string()));
        }

        let count = changes.len();
        let inserted = self.with_table(|table: &mut Table<T>| {
            let mut staged = table.clone();
            let mut inserted = Vec::new();
            for change in changes.into_changes() {
                staged.apply(change, &mut inserted)?;
            }
            *table = staged;
            Ok::<_, StoreError>(inserted)
        })??;

        self.commits.fetch_add(1, Ordering::SeqCst);
        self.writes.fetch_add(count, Ordering::SeqCst);
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{PermissionEntity, PersonEntity, RolEntity};
    use chrono::Utc;

    fn rol(type_rol: &str) -> RolEntity {
        RolEntity {
            id: 0,
            type_rol: type_rol.to_string(),
            description: None,
            active: true,
        }
    }

    fn person(number_identification: i64) -> PersonEntity {
        PersonEntity {
            id: 0,
            first_name: "Ana".to_string(),
            second_name: None,
            first_last_name: "Gómez".to_string(),
            second_last_name: None,
            phone_number: None,
            number_identification,
            email: Some("ana@example.com".to_string()),
            create_date: Utc::now(),
            delete_date: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_keys() {
        let store = MemoryStore::new();
        let inserted = store
            .commit(ChangeSet::new().insert(rol("admin")).insert(rol("auditor")))
            .await
            .unwrap();

        assert_eq!(inserted.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(store.row_count::<RolEntity>(), 2);
        assert_eq!(store.commit_count(), 1);
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn test_failed_change_rolls_back_whole_commit() {
        let store = MemoryStore::new();
        let mut missing = rol("ghost");
        missing.id = 42;

        let result = store
            .commit(ChangeSet::new().insert(rol("admin")).update(missing))
            .await;

        assert!(matches!(
            result,
            Err(StoreError::NotFound { table: "roles", id: 42 })
        ));
        assert_eq!(store.row_count::<RolEntity>(), 0);
        assert_eq!(store.commit_count(), 0);
    }

    #[tokio::test]
    async fn test_injected_failure_affects_one_commit() {
        let store = MemoryStore::new();
        store.fail_next_commit();

        assert!(store.commit(ChangeSet::new().insert(rol("admin"))).await.is_err());
        assert!(store.commit(ChangeSet::new().insert(rol("admin"))).await.is_ok());
        assert_eq!(store.row_count::<RolEntity>(), 1);
    }

    #[tokio::test]
    async fn test_update_columns_rejects_unknown_column() {
        let store = MemoryStore::new();
        let seeded = store.seed(rol("admin")).unwrap();

        let result = store
            .commit(ChangeSet::new().update_columns(seeded, &["nickname"]))
            .await;
        assert!(matches!(result, Err(StoreError::UnknownColumn { .. })));
    }

    #[tokio::test]
    async fn test_seed_keeps_explicit_keys() {
        let store = MemoryStore::new();
        let mut explicit = rol("admin");
        explicit.id = 10;
        store.seed(explicit).unwrap();
        let next = store.seed(rol("auditor")).unwrap();

        assert_eq!(next.id, 11);
        assert_eq!(store.commit_count(), 0);
        assert!(store.find_by_id::<RolEntity>(10).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_tables_are_isolated_per_entity() {
        let store = MemoryStore::new();
        store.seed(rol("admin")).unwrap();

        let permissions: Vec<PermissionEntity> = store.find_all().await.unwrap();
        assert!(permissions.is_empty());
    }

    #[tokio::test]
    async fn test_update_columns_writes_only_named_columns() {
        let store = MemoryStore::new();
        let seeded = store.seed(person(123)).unwrap();

        let mut changed = seeded.clone();
        changed.first_name = "Eva".to_string();
        changed.email = Some("eva@example.com".to_string());
        store
            .commit(ChangeSet::new().update_columns(changed, &["first_name"]))
            .await
            .unwrap();

        let stored: PersonEntity = store.find_by_id(seeded.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Eva");
        assert_eq!(stored.email, seeded.email);
    }

    #[tokio::test]
    async fn test_full_update_keeps_stored_delete_date() {
        let store = MemoryStore::new();
        let mut retired = person(555);
        retired.delete_date = Some(Utc::now());
        let retired = store.seed(retired).unwrap();

        let mut revived = retired.clone();
        revived.delete_date = None;
        revived.first_name = "Luis".to_string();
        store.commit(ChangeSet::new().update(revived)).await.unwrap();

        let stored: PersonEntity = store.find_by_id(retired.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Luis");
        assert_eq!(stored.delete_date, retired.delete_date);
        assert_eq!(stored.create_date, retired.create_date);
    }

    #[tokio::test]
    async fn test_unique_column_rejects_second_live_row() {
        let store = MemoryStore::new();
        store.commit(ChangeSet::new().insert(person(123))).await.unwrap();

        let result = store.commit(ChangeSet::new().insert(person(123))).await;
        assert!(matches!(
            result,
            Err(StoreError::Conflict { table: "persons", .. })
        ));
        assert_eq!(store.row_count::<PersonEntity>(), 1);
    }

    #[tokio::test]
    async fn test_unique_column_ignores_soft_deleted_rows() {
        let store = MemoryStore::new();
        let mut retired = person(555);
        retired.delete_date = Some(Utc::now());
        store.seed(retired).unwrap();

        let inserted = store.commit(ChangeSet::new().insert(person(555))).await.unwrap();
        assert_eq!(inserted[0].id, 2);
    }

    #[tokio::test]
    async fn test_update_into_taken_value_rolls_back() {
        let store = MemoryStore::new();
        let first = store.seed(person(123)).unwrap();
        let mut second = store.seed(person(456)).unwrap();
        second.number_identification = first.number_identification;

        let result = store
            .commit(ChangeSet::new().update_columns(second.clone(), &["number_identification"]))
            .await;
        assert!(matches!(result, Err(StoreError::Conflict { .. })));

        let stored: PersonEntity = store.find_by_id(second.id).await.unwrap().unwrap();
        assert_eq!(stored.number_identification, 456);
    }
}
