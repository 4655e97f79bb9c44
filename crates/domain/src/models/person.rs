//! Person data transfer shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::Identified;

/// Full person view, also accepted as the creation payload.
///
/// `id` is ignored on creation; the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Second name must be at most 100 characters"))]
    pub second_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "First last name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_person_name"))]
    pub first_last_name: String,

    #[validate(length(max = 100, message = "Second last name must be at most 100 characters"))]
    pub second_last_name: Option<String>,

    #[validate(custom(function = "shared::validation::validate_phone_number"))]
    pub phone_number: Option<String>,

    #[validate(custom(function = "shared::validation::validate_identification_number"))]
    pub number_identification: i64,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

/// Update view for a person.
///
/// Names are nullable so the shape can also be used as an object-level
/// patch; the dedicated person patch writes them unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdateDto {
    pub id: i32,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Second name must be at most 100 characters"))]
    pub second_name: Option<String>,

    #[validate(length(max = 100, message = "First last name must be at most 100 characters"))]
    pub first_last_name: Option<String>,

    #[validate(length(max = 100, message = "Second last name must be at most 100 characters"))]
    pub second_last_name: Option<String>,

    #[validate(custom(function = "shared::validation::validate_phone_number"))]
    pub phone_number: Option<String>,

    #[validate(custom(function = "shared::validation::validate_identification_number"))]
    pub number_identification: i64,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

impl Identified for PersonUpdateDto {
    fn id(&self) -> i32 {
        self.id
    }
}
