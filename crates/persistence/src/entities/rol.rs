//! Role entity (database row mapping).

use domain::models::{RolDto, RolUpdateDto};
use sqlx::FromRow;

use crate::entity::{Activable, Entity, EntityId};
use crate::mapping::{merge_optional, merge_value, MergeFrom};
use crate::store::Value;

/// Database row mapping for the roles table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RolEntity {
    pub id: i32,
    pub type_rol: String,
    pub description: Option<String>,
    pub active: bool,
}

impl Entity for RolEntity {
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static [&'static str] = &["type_rol", "description", "active"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.type_rol.clone().into(),
            self.description.clone().into(),
            self.active.into(),
        ]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "type_rol" => self.type_rol = from.type_rol.clone(),
            "description" => self.description = from.description.clone(),
            "active" => self.active = from.active,
            _ => return false,
        }
        true
    }

    fn as_activable_mut(&mut self) -> Option<&mut dyn Activable> {
        Some(self)
    }
}

impl Activable for RolEntity {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl From<RolDto> for RolEntity {
    fn from(dto: RolDto) -> Self {
        Self {
            id: dto.id,
            type_rol: dto.type_rol,
            description: dto.description,
            active: dto.active,
        }
    }
}

impl From<RolEntity> for RolDto {
    fn from(entity: RolEntity) -> Self {
        Self {
            id: entity.id,
            type_rol: entity.type_rol,
            description: entity.description,
            active: entity.active,
        }
    }
}

impl MergeFrom<RolUpdateDto> for RolEntity {
    fn merge_from(&mut self, dto: RolUpdateDto) {
        merge_value(&mut self.type_rol, dto.type_rol);
        merge_optional(&mut self.description, dto.description);
        merge_value(&mut self.active, dto.active);
    }
}
