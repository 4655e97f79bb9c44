//! Data transfer shapes exchanged with the controller layer.

pub mod assignment;
pub mod form;
pub mod module;
pub mod permission;
pub mod person;
pub mod rol;
pub mod status;
pub mod user;

pub use assignment::{FormModuleDto, RolFormPermissionDto, UserRolDto};
pub use form::FormDto;
pub use module::{ModuleDto, ModuleUpdateDto};
pub use permission::PermissionDto;
pub use person::{PersonDto, PersonUpdateDto};
pub use rol::{RolDto, RolUpdateDto};
pub use status::{ActiveDto, Identified, StatusDto};
pub use user::UserDto;
