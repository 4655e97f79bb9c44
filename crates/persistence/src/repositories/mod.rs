//! Repository implementations for store operations.

pub mod person;
pub mod repository;

pub use person::PersonRepository;
pub use repository::{CrudRepository, Repository};
