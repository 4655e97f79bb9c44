//! Person service: generic CRUD plus validated creation and the name patch.

use domain::models::{PersonDto, PersonUpdateDto};
use persistence::entities::PersonEntity;
use persistence::repositories::PersonRepository;
use persistence::{PgStore, Session, Store};
use std::ops::Deref;
use validator::Validate;

use crate::error::ServiceError;
use crate::services::base::Service;

/// Message returned when a live person already holds the identification number.
pub const DUPLICATE_DOCUMENT: &str = "identification number already registered";

/// Service for person records.
///
/// Dereferences to the generic person service for the shared operations.
pub struct PersonService<S = PgStore> {
    base: Service<PersonDto, PersonEntity, PersonRepository<S>>,
    repository: PersonRepository<S>,
}

impl<S: Store> PersonService<S> {
    pub fn new(session: Session<S>) -> Self {
        let repository = PersonRepository::new(session);
        Self {
            base: Service::new(repository.clone()),
            repository,
        }
    }

    /// Validates and registers a new person.
    ///
    /// Fails without writing when the payload is invalid or a live person
    /// already holds the same identification number.
    pub async fn add_from_create_dto(&self, dto: PersonDto) -> Result<PersonDto, ServiceError> {
        dto.validate()?;

        if self
            .repository
            .get_by_document(dto.number_identification)
            .await?
            .is_some()
        {
            tracing::warn!(
                number_identification = dto.number_identification,
                "Rejected duplicate person registration"
            );
            return Err(ServiceError::Validation(DUPLICATE_DOCUMENT.to_string()));
        }

        self.base.add(dto).await
    }

    /// Overwrites the name, phone and document fields of a live person.
    pub async fn patch_person(&self, dto: PersonUpdateDto) -> bool {
        self.repository.patch_person(dto).await
    }
}

impl<S> Deref for PersonService<S> {
    type Target = Service<PersonDto, PersonEntity, PersonRepository<S>>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
