pub mod contact;
pub mod health;
pub mod views;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /contactos                 list, create
/// /contactos/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/contactos", contact::router())
}
