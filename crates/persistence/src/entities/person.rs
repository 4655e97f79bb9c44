//! Person entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{PersonDto, PersonUpdateDto};
use sqlx::FromRow;

use crate::entity::{Entity, EntityId, HasCreationTimestamp, SoftDeletable};
use crate::mapping::{merge_optional, merge_value, MergeFrom};
use crate::store::Value;

/// Database row mapping for the persons table.
///
/// Persons are soft-deleted and stamped at creation, but carry no active flag.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PersonEntity {
    pub id: i32,
    pub first_name: String,
    pub second_name: Option<String>,
    pub first_last_name: String,
    pub second_last_name: Option<String>,
    pub phone_number: Option<String>,
    pub number_identification: i64,
    pub email: Option<String>,
    pub create_date: DateTime<Utc>,
    pub delete_date: Option<DateTime<Utc>>,
}

impl PersonEntity {
    /// Business-unique natural key column.
    pub const DOCUMENT_COLUMN: &'static str = "number_identification";

    /// Columns overwritten by the dedicated person patch.
    pub const PATCHED_COLUMNS: &'static [&'static str] = &[
        "first_name",
        "second_name",
        "first_last_name",
        "second_last_name",
        "phone_number",
        "number_identification",
    ];
}

impl Entity for PersonEntity {
    const TABLE: &'static str = "persons";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "second_name",
        "first_last_name",
        "second_last_name",
        "phone_number",
        "number_identification",
        "email",
        "create_date",
        "delete_date",
    ];
    const INSERT_ONLY: &'static [&'static str] = &["create_date"];
    const KEPT_ON_UPDATE: &'static [&'static str] = &["delete_date"];
    const UNIQUE: &'static [&'static str] = &["number_identification"];

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.first_name.clone().into(),
            self.second_name.clone().into(),
            self.first_last_name.clone().into(),
            self.second_last_name.clone().into(),
            self.phone_number.clone().into(),
            self.number_identification.into(),
            self.email.clone().into(),
            self.create_date.into(),
            self.delete_date.into(),
        ]
    }

    fn copy_column(&mut self, from: &Self, column: &str) -> bool {
        match column {
            "first_name" => self.first_name = from.first_name.clone(),
            "second_name" => self.second_name = from.second_name.clone(),
            "first_last_name" => self.first_last_name = from.first_last_name.clone(),
            "second_last_name" => self.second_last_name = from.second_last_name.clone(),
            "phone_number" => self.phone_number = from.phone_number.clone(),
            "number_identification" => self.number_identification = from.number_identification,
            "email" => self.email = from.email.clone(),
            "create_date" => self.create_date = from.create_date,
            "delete_date" => self.delete_date = from.delete_date,
            _ => return false,
        }
        true
    }

    fn as_timestamped(&self) -> Option<&dyn HasCreationTimestamp> {
        Some(self)
    }

    fn as_timestamped_mut(&mut self) -> Option<&mut dyn HasCreationTimestamp> {
        Some(self)
    }

    fn as_soft_deletable(&self) -> Option<&dyn SoftDeletable> {
        Some(self)
    }
}

impl HasCreationTimestamp for PersonEntity {
    fn created_at(&self) -> DateTime<Utc> {
        self.create_date
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.create_date = at;
    }
}

impl SoftDeletable for PersonEntity {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.delete_date
    }
}

impl From<PersonDto> for PersonEntity {
    fn from(dto: PersonDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            second_name: dto.second_name,
            first_last_name: dto.first_last_name,
            second_last_name: dto.second_last_name,
            phone_number: dto.phone_number,
            number_identification: dto.number_identification,
            email: dto.email,
            create_date: DateTime::<Utc>::default(),
            delete_date: None,
        }
    }
}

impl From<PersonEntity> for PersonDto {
    fn from(entity: PersonEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            second_name: entity.second_name,
            first_last_name: entity.first_last_name,
            second_last_name: entity.second_last_name,
            phone_number: entity.phone_number,
            number_identification: entity.number_identification,
            email: entity.email,
        }
    }
}

impl From<PersonEntity> for PersonUpdateDto {
    fn from(entity: PersonEntity) -> Self {
        Self {
            id: entity.id,
            first_name: Some(entity.first_name),
            second_name: entity.second_name,
            first_last_name: Some(entity.first_last_name),
            second_last_name: entity.second_last_name,
            phone_number: entity.phone_number,
            number_identification: entity.number_identification,
            email: entity.email,
        }
    }
}

impl MergeFrom<PersonUpdateDto> for PersonEntity {
    fn merge_from(&mut self, dto: PersonUpdateDto) {
        merge_value(&mut self.first_name, dto.first_name);
        merge_optional(&mut self.second_name, dto.second_name);
        merge_value(&mut self.first_last_name, dto.first_last_name);
        merge_optional(&mut self.second_last_name, dto.second_last_name);
        merge_optional(&mut self.phone_number, dto.phone_number);
        self.number_identification = dto.number_identification;
        merge_optional(&mut self.email, dto.email);
    }
}
