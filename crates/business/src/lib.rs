//! Business layer for the access control backend.
//!
//! This crate contains:
//! - The generic and person services over the persistence repositories
//! - Request scope wiring and the process-wide backend handle
//! - Configuration loading and logging initialization

pub mod config;
pub mod error;
pub mod logging;
pub mod scope;
pub mod services;

pub use error::ServiceError;
pub use scope::{Backend, RequestScope};
