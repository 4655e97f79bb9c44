//! Role data transfer shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::Identified;

/// Full role view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolDto {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 50, message = "Role type must be 1-50 characters"))]
    pub type_rol: String,

    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub active: bool,
}

/// Update view for a role; null fields are left untouched when merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RolUpdateDto {
    pub id: i32,

    #[validate(length(min = 1, max = 50, message = "Role type must be 1-50 characters"))]
    pub type_rol: Option<String>,

    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    pub description: Option<String>,

    pub active: Option<bool>,
}

impl Identified for RolUpdateDto {
    fn id(&self) -> i32 {
        self.id
    }
}
