//! Column values, row filters and staged change sets.

use chrono::{DateTime, Utc};

use crate::entity::{Entity, EntityId, SoftDeletable, DELETE_DATE_COLUMN};

/// A single column value as bound into a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    BigInt(i64),
    Bool(bool),
    Text(Option<String>),
    Timestamp(Option<DateTime<Utc>>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Text(None) | Value::Timestamp(None))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::BigInt(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(Some(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Some(value.to_string()))
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        Value::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(Some(value))
    }
}

impl From<Option<DateTime<Utc>>> for Value {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        Value::Timestamp(value)
    }
}

/// One predicate of a [`Filter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Eq(&'static str, Value),
    IsNull(&'static str),
}

/// Conjunction of column predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of `T` whose delete timestamp is unset.
    pub fn not_deleted<T: SoftDeletable>() -> Self {
        Self::new().is_null(DELETE_DATE_COLUMN)
    }

    pub fn eq(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Eq(column, value.into()));
        self
    }

    pub fn is_null(mut self, column: &'static str) -> Self {
        self.conditions.push(Condition::IsNull(column));
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Evaluates the filter against an in-memory row.
    ///
    /// A condition naming a column the entity does not have never matches.
    pub fn matches<T: Entity>(&self, row: &T) -> bool {
        self.conditions.iter().all(|condition| match condition {
            Condition::Eq(column, expected) => row.value_of(column).as_ref() == Some(expected),
            Condition::IsNull(column) => row.value_of(column).is_some_and(|v| v.is_null()),
        })
    }

    /// Renders a `WHERE` clause with placeholders numbered from `first_param`.
    ///
    /// Returns an empty clause for an empty filter.
    pub(crate) fn to_sql(&self, first_param: usize) -> (String, Vec<Value>) {
        if self.conditions.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut params = Vec::new();
        let clauses: Vec<String> = self
            .conditions
            .iter()
            .map(|condition| match condition {
                Condition::Eq(column, value) => {
                    params.push(value.clone());
                    format!("{} = ${}", column, first_param + params.len() - 1)
                }
                Condition::IsNull(column) => format!("{} IS NULL", column),
            })
            .collect();

        (format!(" WHERE {}", clauses.join(" AND ")), params)
    }
}

/// A staged operation on one row.
#[derive(Debug, Clone)]
pub enum Change<T> {
    Insert(T),
    /// Writes every updatable column.
    Update(T),
    /// Writes only the named columns.
    UpdateColumns {
        row: T,
        columns: Vec<&'static str>,
    },
    Delete(EntityId),
}

/// Operations staged for one commit.
#[derive(Debug, Clone)]
pub struct ChangeSet<T> {
    changes: Vec<Change<T>>,
}

impl<T: Entity> Default for ChangeSet<T> {
    fn default() -> Self {
        Self {
            changes: Vec::new(),
        }
    }
}

impl<T: Entity> ChangeSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, row: T) -> Self {
        self.changes.push(Change::Insert(row));
        self
    }

    pub fn update(mut self, row: T) -> Self {
        self.changes.push(Change::Update(row));
        self
    }

    pub fn update_columns(mut self, row: T, columns: &[&'static str]) -> Self {
        self.changes.push(Change::UpdateColumns {
            row,
            columns: columns.to_vec(),
        });
        self
    }

    pub fn delete(mut self, id: EntityId) -> Self {
        self.changes.push(Change::Delete(id));
        self
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn into_changes(self) -> Vec<Change<T>> {
        self.changes
    }
}
