//! Route definitions for the HTML pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::views;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET  /                -> index
/// GET  /crear           -> new_form
/// POST /crear           -> submit_create
/// GET  /editar/{id}     -> edit_form
/// POST /editar/{id}     -> submit_edit
/// POST /eliminar/{id}   -> submit_delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(views::index))
        .route("/crear", get(views::new_form).post(views::submit_create))
        .route("/editar/{id}", get(views::edit_form).post(views::submit_edit))
        .route("/eliminar/{id}", post(views::submit_delete))
}
