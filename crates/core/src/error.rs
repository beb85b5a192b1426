use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
