//! Permission entity (database row mapping).

use domain::models::PermissionDto;
use sqlx::FromRow;

use crate::entity::{Entity, EntityId};
use crate::store::Value;

/// Database row mapping for the permissions table. Not activable.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PermissionEntity {
    pub id: i32,
    pub name: String,
    pub display_name: String,
}

impl Entity for PermissionEntity {
    const TABLE: &'static str = "permissions";
    const COLUMNS: &'static [&'static str] = &["name", "display_name"];
    const UNIQUE: &'static [&'static str] = &["name"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![self.name.clone().into(), self.display_name.clone().into()]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "name" => self.name = from.name.clone(),
            "display_name" => self.display_name = from.display_name.clone(),
            _ => return false,
        }
        true
    }
}

impl From<PermissionDto> for PermissionEntity {
    fn from(dto: PermissionDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            display_name: dto.display_name,
        }
    }
}

impl From<PermissionEntity> for PermissionDto {
    fn from(entity: PermissionEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            display_name: entity.display_name,
        }
    }
}
