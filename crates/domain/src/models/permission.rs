//! Permission data transfer shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full permission view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDto {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Display name must be 1-100 characters"))]
    pub display_name: String,
}
