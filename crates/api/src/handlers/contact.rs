//! Handlers for the `/api/contactos` resource (JSON mode).

use agenda_core::contact::{validate_contact, ContactPayload, CONTACT_ENTITY};
use agenda_core::error::CoreError;
use agenda_core::types::DbId;
use agenda_db::models::contact::Contact;
use agenda_db::repositories::ContactRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Body returned by a successful delete.
pub const MSG_DELETED: &str = "Contacto eliminado exitosamente.";

/// Error for an id with no matching row.
pub fn contact_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: CONTACT_ENTITY,
        id,
    })
}

/// POST /api/contactos
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ContactPayload>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    let contact = validate_contact(&input)?;
    let created = ContactRepo::create(&state.pool, &contact).await?;
    tracing::info!(id = created.id, "Contact created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/contactos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    tracing::debug!(count = contacts.len(), "Listed contacts");
    Ok(Json(contacts))
}

/// GET /api/contactos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| contact_not_found(id))?;
    Ok(Json(contact))
}

/// PUT /api/contactos/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<ContactPayload>,
) -> AppResult<Json<Contact>> {
    let contact = validate_contact(&input)?;
    let updated = ContactRepo::update(&state.pool, id, &contact)
        .await?
        .ok_or_else(|| contact_not_found(id))?;
    tracing::info!(id, "Contact updated");
    Ok(Json(updated))
}

/// DELETE /api/contactos/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(contact_not_found(id));
    }
    tracing::info!(id, "Contact deleted");
    Ok(Json(MessageResponse {
        message: MSG_DELETED,
    }))
}
