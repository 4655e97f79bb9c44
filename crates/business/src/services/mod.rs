//! Business services.
//!
//! Every entity gets the generic [`Service`]; persons get [`PersonService`]
//! on top of it.

pub mod base;
pub mod person;

pub use base::Service;
pub use person::PersonService;

use domain::models::{
    FormDto, FormModuleDto, ModuleDto, PermissionDto, RolDto, RolFormPermissionDto, UserDto,
    UserRolDto,
};
use persistence::entities::{
    FormEntity, FormModuleEntity, ModuleEntity, PermissionEntity, RolEntity,
    RolFormPermissionEntity, UserEntity, UserRolEntity,
};
use persistence::repositories::Repository;
use persistence::PgStore;

/// Generic service over the generic repository for `E`.
pub type EntityService<D, E, S = PgStore> = Service<D, E, Repository<E, S>>;

pub type UserService<S = PgStore> = EntityService<UserDto, UserEntity, S>;
pub type RolService<S = PgStore> = EntityService<RolDto, RolEntity, S>;
pub type ModuleService<S = PgStore> = EntityService<ModuleDto, ModuleEntity, S>;
pub type FormService<S = PgStore> = EntityService<FormDto, FormEntity, S>;
pub type PermissionService<S = PgStore> = EntityService<PermissionDto, PermissionEntity, S>;
pub type UserRolService<S = PgStore> = EntityService<UserRolDto, UserRolEntity, S>;
pub type FormModuleService<S = PgStore> = EntityService<FormModuleDto, FormModuleEntity, S>;
pub type RolFormPermissionService<S = PgStore> =
    EntityService<RolFormPermissionDto, RolFormPermissionEntity, S>;
