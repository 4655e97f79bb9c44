//! Shared utilities for the access control backend.
//!
//! This crate provides functionality used across the other crates:
//! - Field validators plugged into `validator` derives on request DTOs

pub mod validation;
