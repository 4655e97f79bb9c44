//! Join-record entities (database row mappings).

use domain::models::{FormModuleDto, RolFormPermissionDto, UserRolDto};
use sqlx::FromRow;

use crate::entity::{Entity, EntityId};
use crate::store::Value;

/// Database row mapping for the user_roles table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct UserRolEntity {
    pub id: i32,
    pub user_id: i32,
    pub rol_id: i32,
}

/// Database row mapping for the form_modules table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct FormModuleEntity {
    pub id: i32,
    pub form_id: i32,
    pub module_id: i32,
}

/// Database row mapping for the rol_form_permissions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct RolFormPermissionEntity {
    pub id: i32,
    pub rol_id: i32,
    pub form_id: i32,
    pub permission_id: i32,
}

impl Entity for UserRolEntity {
    const TABLE: &'static str = "user_roles";
    const COLUMNS: &'static [&'static str] = &["user_id", "rol_id"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![self.user_id.into(), self.rol_id.into()]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "user_id" => self.user_id = from.user_id,
            "rol_id" => self.rol_id = from.rol_id,
            _ => return false,
        }
        true
    }
}

impl Entity for FormModuleEntity {
    const TABLE: &'static str = "form_modules";
    const COLUMNS: &'static [&'static str] = &["form_id", "module_id"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![self.form_id.into(), self.module_id.into()]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "form_id" => self.form_id = from.form_id,
            "module_id" => self.module_id = from.module_id,
            _ => return false,
        }
        true
    }
}

impl Entity for RolFormPermissionEntity {
    const TABLE: &'static str = "rol_form_permissions";
    const COLUMNS: &'static [&'static str] = &["rol_id", "form_id", "permission_id"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.rol_id.into(),
            self.form_id.into(),
            self.permission_id.into(),
        ]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "rol_id" => self.rol_id = from.rol_id,
            "form_id" => self.form_id = from.form_id,
            "permission_id" => self.permission_id = from.permission_id,
            _ => return false,
        }
        true
    }
}

impl From<UserRolDto> for UserRolEntity {
    fn from(dto: UserRolDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            rol_id: dto.rol_id,
        }
    }
}

impl From<UserRolEntity> for UserRolDto {
    fn from(entity: UserRolEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            rol_id: entity.rol_id,
        }
    }
}

impl From<FormModuleDto> for FormModuleEntity {
    fn from(dto: FormModuleDto) -> Self {
        Self {
            id: dto.id,
            form_id: dto.form_id,
            module_id: dto.module_id,
        }
    }
}

impl From<FormModuleEntity> for FormModuleDto {
    fn from(entity: FormModuleEntity) -> Self {
        Self {
            id: entity.id,
            form_id: entity.form_id,
            module_id: entity.module_id,
        }
    }
}

impl From<RolFormPermissionDto> for RolFormPermissionEntity {
    fn from(dto: RolFormPermissionDto) -> Self {
        Self {
            id: dto.id,
            rol_id: dto.rol_id,
            form_id: dto.form_id,
            permission_id: dto.permission_id,
        }
    }
}

impl From<RolFormPermissionEntity> for RolFormPermissionDto {
    fn from(entity: RolFormPermissionEntity) -> Self {
        Self {
            id: entity.id,
            rol_id: entity.rol_id,
            form_id: entity.form_id,
            permission_id: entity.permission_id,
        }
    }
}
