//! Database entity definitions.
//!
//! Entities are direct mappings to database rows. Each file also declares the
//! translator bindings between the entity and its DTO shapes.

pub mod assignment;
pub mod form;
pub mod module;
pub mod permission;
pub mod person;
pub mod rol;
pub mod user;

pub use assignment::{FormModuleEntity, RolFormPermissionEntity, UserRolEntity};
pub use form::FormEntity;
pub use module::ModuleEntity;
pub use permission::PermissionEntity;
pub use person::PersonEntity;
pub use rol::RolEntity;
pub use user::UserEntity;
