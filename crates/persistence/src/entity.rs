//! The entity contract shared by every persisted record type, plus the
//! optional capabilities an entity may implement.
//!
//! Generic code never inspects field names. An entity opts into a capability
//! by implementing the capability trait and returning `Some(self)` from the
//! matching hook on [`Entity`]; every hook defaults to `None`.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use std::fmt;

use crate::store::Value;

/// Identity key type assigned by the store.
pub type EntityId = i32;

/// Column toggled by [`Activable`] entities.
pub const ACTIVE_COLUMN: &str = "active";

/// Column holding the delete timestamp of [`SoftDeletable`] entities.
pub const DELETE_DATE_COLUMN: &str = "delete_date";

/// A persisted record type.
pub trait Entity:
    for<'r> FromRow<'r, PgRow> + Clone + fmt::Debug + Send + Sync + Unpin + 'static
{
    /// Table the rows live in.
    const TABLE: &'static str;

    /// Writable columns excluding `id`, in the order produced by [`Entity::values`].
    const COLUMNS: &'static [&'static str];

    /// Columns written when the row is inserted and never rewritten by a full update.
    const INSERT_ONLY: &'static [&'static str] = &[];

    /// Columns a full update leaves at their stored value.
    ///
    /// Unlike [`Entity::INSERT_ONLY`] these change after insert, but only
    /// through a targeted column update.
    const KEPT_ON_UPDATE: &'static [&'static str] = &[];

    /// Columns whose non-null values are unique among live rows.
    const UNIQUE: &'static [&'static str] = &[];

    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);

    /// Current values of [`Entity::COLUMNS`], in order.
    fn values(&self) -> Vec<Value>;

    /// Copies one column from `from`. Returns `false` for an unknown column.
    fn copy_column(&mut self, from: &Self, column: &str) -> bool;

    /// Value of a single column, `id` included.
    fn value_of(&self, column: &str) -> Option<Value> {
        if column == "id" {
            return Some(Value::Int(self.id()));
        }
        let index = Self::COLUMNS.iter().position(|c| *c == column)?;
        self.values().into_iter().nth(index)
    }

    /// Columns a full update writes.
    fn updatable_columns() -> Vec<&'static str> {
        Self::COLUMNS
            .iter()
            .copied()
            .filter(|column| {
                !Self::INSERT_ONLY.contains(column) && !Self::KEPT_ON_UPDATE.contains(column)
            })
            .collect()
    }

    /// Whether the row counts as present; only soft-deleted rows do not.
    fn is_live(&self) -> bool {
        self.as_soft_deletable()
            .map_or(true, |deletable| !deletable.is_deleted())
    }

    fn as_activable_mut(&mut self) -> Option<&mut dyn Activable> {
        None
    }

    fn as_timestamped(&self) -> Option<&dyn HasCreationTimestamp> {
        None
    }

    fn as_timestamped_mut(&mut self) -> Option<&mut dyn HasCreationTimestamp> {
        None
    }

    fn as_soft_deletable(&self) -> Option<&dyn SoftDeletable> {
        None
    }
}

/// Logical enable/disable flag, independent of soft delete.
pub trait Activable: Send + Sync {
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// Creation timestamp stamped once by the service layer.
pub trait HasCreationTimestamp: Send + Sync {
    fn created_at(&self) -> DateTime<Utc>;
    fn set_created_at(&mut self, at: DateTime<Utc>);
}

/// Rows marked dead by a delete timestamp instead of being removed.
///
/// The timestamp lives in [`DELETE_DATE_COLUMN`].
pub trait SoftDeletable: Send + Sync {
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}
