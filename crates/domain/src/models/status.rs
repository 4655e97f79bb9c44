//! Status-only views and the DTO capabilities used by the generic services.

use serde::{Deserialize, Serialize};

/// A DTO that carries an identity key and a desired activation flag.
///
/// Any shape implementing this can drive `set_active` on a service; the
/// service only reads these two values.
pub trait ActiveDto {
    fn id(&self) -> i32;
    fn active(&self) -> bool;
}

/// A DTO that names the row it targets.
pub trait Identified {
    fn id(&self) -> i32;
}

/// Status-only view: `{ "id": 1, "active": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    pub id: i32,
    pub active: bool,
}

impl StatusDto {
    pub fn new(id: i32, active: bool) -> Self {
        Self { id, active }
    }
}

impl ActiveDto for StatusDto {
    fn id(&self) -> i32 {
        self.id
    }

    fn active(&self) -> bool {
        self.active
    }
}
