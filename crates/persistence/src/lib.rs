//! Persistence layer for the access control backend.
//!
//! This crate contains:
//! - Database connection management and embedded migrations
//! - Entity definitions (database row mappings) and their capabilities
//! - The store boundary with PostgreSQL and in-memory implementations
//! - Per-request sessions and the generic and person repositories

pub mod db;
pub mod entities;
pub mod entity;
pub mod mapping;
pub mod metrics;
pub mod repositories;
pub mod session;
pub mod store;

pub use entity::{Activable, Entity, EntityId, HasCreationTimestamp, SoftDeletable};
pub use mapping::MergeFrom;
pub use session::Session;
pub use store::{ChangeSet, Filter, MemoryStore, PgStore, Store, StoreError, Value};
