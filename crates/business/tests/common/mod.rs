//! Common test utilities for integration tests.
//!
//! Integration tests run against the in-memory store, so no database is needed.

#![allow(dead_code)]

use business::RequestScope;
use domain::models::PersonDto;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use persistence::MemoryStore;
use std::sync::Arc;

/// A fresh store and a request scope opened on it.
pub fn test_scope() -> (Arc<MemoryStore>, RequestScope<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let scope = RequestScope::open(Arc::clone(&store));
    (store, scope)
}

/// A second request scope on an existing store.
pub fn next_request(store: &Arc<MemoryStore>) -> RequestScope<MemoryStore> {
    RequestScope::open(Arc::clone(store))
}

/// A valid creation payload for a person holding `number_identification`.
pub fn person_dto(first_name: &str, number_identification: i64) -> PersonDto {
    PersonDto {
        first_name: first_name.to_string(),
        first_last_name: "Gómez".to_string(),
        number_identification,
        email: Some(SafeEmail().fake()),
        ..Default::default()
    }
}
