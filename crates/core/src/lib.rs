//! Domain types and validation for the agenda service.
//!
//! This crate performs no I/O; the database and HTTP layers build on it.

pub mod contact;
pub mod error;
pub mod types;
