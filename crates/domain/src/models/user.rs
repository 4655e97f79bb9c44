//! User account data transfer shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full user view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[serde(default, skip_serializing)] // Never echo credentials back
    pub password: String,

    #[serde(default)]
    pub active: bool,

    pub person_id: i32,
}
