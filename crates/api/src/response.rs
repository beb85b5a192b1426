//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` body for operations that have no entity to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
