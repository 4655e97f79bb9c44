//! Common validation utilities.

use validator::ValidationError;

/// Largest identification number accepted (15 digits).
const MAX_IDENTIFICATION_NUMBER: i64 = 999_999_999_999_999;

lazy_static::lazy_static! {
    static ref PHONE_REGEX: regex::Regex =
        regex::Regex::new(r"^\+?[0-9][0-9 \-]{5,18}[0-9]$").unwrap();
    static ref PERSON_NAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[\p{L}][\p{L} '.\-]*$").unwrap();
}

/// Validates that an identification number is positive and at most 15 digits.
pub fn validate_identification_number(number: i64) -> Result<(), ValidationError> {
    if (1..=MAX_IDENTIFICATION_NUMBER).contains(&number) {
        Ok(())
    } else {
        let mut err = ValidationError::new("identification_number_range");
        err.message = Some("Identification number must be a positive number of at most 15 digits".into());
        Err(err)
    }
}

/// Validates a phone number: optional leading `+`, digits, spaces or dashes, 7-20 characters.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_number_format");
        err.message = Some("Phone number must contain 7-20 digits, spaces or dashes".into());
        Err(err)
    }
}

/// Validates a given or family name: letters plus spaces, apostrophes, dots and dashes.
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    if PERSON_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        let mut err = ValidationError::new("person_name_format");
        err.message = Some("Name must start with a letter and contain only letters".into());
        Err(err)
    }
}
