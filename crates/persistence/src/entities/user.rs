//! User account entity (database row mapping).

use domain::models::UserDto;
use sqlx::FromRow;

use crate::entity::{Activable, Entity, EntityId};
use crate::store::Value;

/// Database row mapping for the users table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserEntity {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub active: bool,
    pub person_id: i32,
}

impl Entity for UserEntity {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["username", "email", "password", "active", "person_id"];
    const KEPT_ON_UPDATE: &'static [&'static str] = &["password"];
    const UNIQUE: &'static [&'static str] = &["username"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.username.clone().into(),
            self.email.clone().into(),
            self.password.clone().into(),
            self.active.into(),
            self.person_id.into(),
        ]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "username" => self.username = from.username.clone(),
            "email" => self.email = from.email.clone(),
            "password" => self.password = from.password.clone(),
            "active" => self.active = from.active,
            "person_id" => self.person_id = from.person_id,
            _ => return false,
        }
        true
    }

    fn as_activable_mut(&mut self) -> Option<&mut dyn Activable> {
        Some(self)
    }
}

impl Activable for UserEntity {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl From<UserDto> for UserEntity {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            password: dto.password,
            active: dto.active,
            person_id: dto.person_id,
        }
    }
}

impl From<UserEntity> for UserDto {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password: entity.password,
            active: entity.active,
            person_id: entity.person_id,
        }
    }
}
