//! PostgreSQL store backed by an `sqlx` pool.
//!
//! Statements are rendered from the entity's table and column metadata.
//! Table and column names are compile-time constants; every value is bound.

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, PgConnection, PgPool};

use super::query::{Change, ChangeSet, Filter, Value};
use super::{Store, StoreError};
use crate::entity::{Entity, EntityId};
use crate::metrics::QueryTimer;

/// Store issuing SQL against PostgreSQL; every commit runs in one transaction.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new PostgreSQL store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn select_sql<T: Entity>() -> String {
    format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
}

fn insert_sql<T: Entity>() -> String {
    let placeholders: Vec<String> = (1..=T::COLUMNS.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

fn update_sql<T: Entity>(columns: &[&'static str]) -> String {
    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ${}",
        T::TABLE,
        assignments.join(", "),
        columns.len() + 1
    )
}

fn arguments(values: Vec<Value>) -> PgArguments {
    let mut args = PgArguments::default();
    for value in values {
        match value {
            Value::Int(v) => args.add(v),
            Value::BigInt(v) => args.add(v),
            Value::Bool(v) => args.add(v),
            Value::Text(v) => args.add(v),
            Value::Timestamp(v) => args.add(v),
        }
    }
    args
}

/// Maps a unique violation (SQLSTATE 23505) to [`StoreError::Conflict`].
fn write_error<T: Entity>(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::Conflict {
                table: T::TABLE,
                constraint: db_err.constraint().unwrap_or("unique").to_string(),
            };
        }
    }
    StoreError::Database(err)
}

async fn execute_update<T: Entity>(
    conn: &mut PgConnection,
    row: &T,
    columns: &[&'static str],
) -> Result<(), StoreError> {
    let mut values = Vec::with_capacity(columns.len() + 1);
    for &column in columns {
        let value = row.value_of(column).ok_or(StoreError::UnknownColumn {
            table: T::TABLE,
            column,
        })?;
        values.push(value);
    }
    values.push(Value::Int(row.id()));

    let sql = update_sql::<T>(columns);
    let result = sqlx::query_with(&sql, arguments(values))
        .execute(conn)
        .await
        .map_err(write_error::<T>)?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound {
            table: T::TABLE,
            id: row.id(),
        });
    }
    Ok(())
}

#[async_trait]
impl Store for PgStore {
    async fn find_all<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
        let timer = QueryTimer::new(T::TABLE, "find_all");
        let sql = format!("{} ORDER BY id", select_sql::<T>());
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        timer.record();
        Ok(rows)
    }

    async fn find_by_id<T: Entity>(&self, id: EntityId) -> Result<Option<T>, StoreError> {
        let timer = QueryTimer::new(T::TABLE, "find_by_id");
        let sql = format!("{} WHERE id = $1", select_sql::<T>());
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        timer.record();
        Ok(row)
    }

    async fn find_first<T: Entity>(&self, filter: &Filter) -> Result<Option<T>, StoreError> {
        let timer = QueryTimer::new(T::TABLE, "find_first");
        let (clause, params) = filter.to_sql(1);
        let sql = format!("{}{} ORDER BY id LIMIT 1", select_sql::<T>(), clause);
        let row = sqlx::query_as_with::<_, T, _>(&sql, arguments(params))
            .fetch_optional(&self.pool)
            .await?;
        timer.record();
        Ok(row)
    }

    async fn commit<T: Entity>(&self, changes: ChangeSet<T>) -> Result<Vec<T>, StoreError> {
        let timer = QueryTimer::new(T::TABLE, "commit");
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::new();

        for change in changes.into_changes() {
            match change {
                Change::Insert(mut row) => {
                    let sql = insert_sql::<T>();
                    let id: EntityId = sqlx::query_scalar_with(&sql, arguments(row.values()))
                        .fetch_one(&mut *tx)
                        .await
                        .map_err(write_error::<T>)?;
                    row.set_id(id);
                    inserted.push(row);
                }
                Change::Update(row) => {
                    execute_update(&mut tx, &row, &T::updatable_columns()).await?;
                }
                Change::UpdateColumns { row, columns } => {
                    execute_update(&mut tx, &row, &columns).await?;
                }
                Change::Delete(id) => {
                    let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
                    let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
                    // Deleting a missing row is a no-op, unlike updating one.
                    if result.rows_affected() == 0 {
                        tracing::debug!(table = T::TABLE, id = id, "Delete matched no row");
                    }
                }
            }
        }

        tx.commit().await?;
        timer.record();
        Ok(inserted)
    }
}
