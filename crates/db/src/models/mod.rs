//! Row models.
//!
//! Each submodule holds a `FromRow` + `Serialize` struct matching a table row.
//! Input DTOs come from `agenda_core` after validation.

pub mod contact;
