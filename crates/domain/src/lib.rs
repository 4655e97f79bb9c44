//! Domain layer for the access control backend.
//!
//! This crate contains:
//! - Data transfer shapes (full, update and status views) for every entity kind
//! - DTO capabilities consumed by the generic services (`ActiveDto`, `Identified`)

pub mod models;
