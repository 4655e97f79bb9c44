//! Form entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::FormDto;
use sqlx::FromRow;

use crate::entity::{Activable, Entity, EntityId, HasCreationTimestamp, SoftDeletable};
use crate::store::Value;

/// Database row mapping for the forms table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FormEntity {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub create_date: DateTime<Utc>,
    pub delete_date: Option<DateTime<Utc>>,
}

impl Entity for FormEntity {
    const TABLE: &'static str = "forms";
    const COLUMNS: &'static [&'static str] =
        &["name", "description", "active", "create_date", "delete_date"];
    const INSERT_ONLY: &'static [&'static str] = &["create_date"];
    const KEPT_ON_UPDATE: &'static [&'static str] = &["delete_date"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.description.clone().into(),
            self.active.into(),
            self.create_date.into(),
            self.delete_date.into(),
        ]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "name" => self.name = from.name.clone(),
            "description" => self.description = from.description.clone(),
            "active" => self.active = from.active,
            "create_date" => self.create_date = from.create_date,
            "delete_date" => self.delete_date = from.delete_date,
            _ => return false,
        }
        true
    }

    fn as_activable_mut(&mut self) -> Option<&mut dyn Activable> {
        Some(self)
    }

    fn as_timestamped(&self) -> Option<&dyn HasCreationTimestamp> {
        Some(self)
    }

    fn as_timestamped_mut(&mut self) -> Option<&mut dyn HasCreationTimestamp> {
        Some(self)
    }

    fn as_soft_deletable(&self) -> Option<&dyn SoftDeletable> {
        Some(self)
    }
}

impl Activable for FormEntity {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl HasCreationTimestamp for FormEntity {
    fn created_at(&self) -> DateTime<Utc> {
        self.create_date
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.create_date = at;
    }
}

impl SoftDeletable for FormEntity {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.delete_date
    }
}

impl From<FormDto> for FormEntity {
    fn from(dto: FormDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            active: dto.active,
            create_date: dto.create_date.unwrap_or_default(),
            delete_date: None,
        }
    }
}

impl From<FormEntity> for FormDto {
    fn from(entity: FormEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            active: entity.active,
            create_date: Some(entity.create_date),
        }
    }
}
