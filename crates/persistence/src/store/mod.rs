//! The persistent store boundary.
//!
//! Repositories only ever talk to a [`Store`]: list, find by key, find the
//! first row matching a [`Filter`], and commit a [`ChangeSet`] as one atomic
//! unit. [`PgStore`] backs production, [`MemoryStore`] backs tests and local
//! tooling.

mod memory;
mod postgres;
mod query;

use async_trait::async_trait;
use thiserror::Error;

use crate::entity::{Entity, EntityId};

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use query::{Change, ChangeSet, Condition, Filter, Value};

/// Errors raised by a store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{table} row {id} not found")]
    NotFound { table: &'static str, id: EntityId },

    #[error("{table} has no column {column}")]
    UnknownColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A unique column already holds the value on another live row.
    #[error("{table} conflict on {constraint}")]
    Conflict {
        table: &'static str,
        constraint: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// A relational store reachable through a per-type set of rows.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Every row of `T`, ordered by identity key.
    async fn find_all<T: Entity>(&self) -> Result<Vec<T>, StoreError>;

    async fn find_by_id<T: Entity>(&self, id: EntityId) -> Result<Option<T>, StoreError>;

    /// First row of `T` (lowest key) matching every condition of `filter`.
    async fn find_first<T: Entity>(&self, filter: &Filter) -> Result<Option<T>, StoreError>;

    /// Applies every staged change or none of them.
    ///
    /// Returns the inserted rows carrying their assigned keys, in staging order.
    /// Updating a missing row fails with [`StoreError::NotFound`].
    async fn commit<T: Entity>(&self, changes: ChangeSet<T>) -> Result<Vec<T>, StoreError>;
}
