//! Handlers for the server-rendered HTML pages.
//!
//! Share validation and persistence with the JSON handlers. Rejected form
//! submissions re-render the form with the submitted values and an inline
//! message; unknown ids and server failures become plain-text pages.

use agenda_core::contact::{validate_contact, ContactPayload};
use agenda_core::error::CoreError;
use agenda_core::types::DbId;
use agenda_db::models::contact::Contact;
use agenda_db::repositories::ContactRepo;
use agenda_db::DbPool;
use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;

use crate::error::{AppError, AppResult, PageError};
use crate::handlers::contact::contact_not_found;
use crate::state::AppState;
use crate::templates::{FormPage, IndexPage};

type PageResult = Result<Response, PageError>;

/// GET /
pub async fn index(State(state): State<AppState>) -> PageResult {
    let contacts = ContactRepo::list(&state.pool).await?;
    render(StatusCode::OK, &IndexPage { contacts })
}

/// GET /crear
pub async fn new_form() -> PageResult {
    render(StatusCode::OK, &FormPage::create())
}

/// POST /crear
pub async fn submit_create(
    State(state): State<AppState>,
    Form(input): Form<ContactPayload>,
) -> PageResult {
    match insert_submission(&state.pool, &input).await {
        Ok(created) => {
            tracing::info!(id = created.id, "Contact created from form");
            Ok(Redirect::to("/").into_response())
        }
        Err(err) => rejected_form(None, &input, err),
    }
}

/// GET /editar/{id}
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<DbId>) -> PageResult {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| contact_not_found(id))?;
    render(StatusCode::OK, &FormPage::edit(&contact))
}

/// POST /editar/{id}
pub async fn submit_edit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<ContactPayload>,
) -> PageResult {
    match update_submission(&state.pool, id, &input).await {
        Ok(updated) => {
            tracing::info!(id = updated.id, "Contact updated from form");
            Ok(Redirect::to("/").into_response())
        }
        Err(err @ AppError::Core(CoreError::NotFound { .. })) => Err(PageError(err)),
        Err(err) => rejected_form(Some(id), &input, err),
    }
}

/// POST /eliminar/{id}
pub async fn submit_delete(State(state): State<AppState>, Path(id): Path<DbId>) -> PageResult {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(contact_not_found(id).into());
    }
    tracing::info!(id, "Contact deleted from form");
    Ok(Redirect::to("/").into_response())
}

async fn insert_submission(pool: &DbPool, input: &ContactPayload) -> AppResult<Contact> {
    let contact = validate_contact(input)?;
    Ok(ContactRepo::create(pool, &contact).await?)
}

async fn update_submission(pool: &DbPool, id: DbId, input: &ContactPayload) -> AppResult<Contact> {
    let contact = validate_contact(input)?;
    ContactRepo::update(pool, id, &contact)
        .await?
        .ok_or_else(|| contact_not_found(id))
}

/// Re-render the form with the user's input and the error message inline.
fn rejected_form(id: Option<DbId>, input: &ContactPayload, err: AppError) -> PageResult {
    let (status, _code, message) = err.classify();
    tracing::warn!(error = %err, ?id, "Contact form rejected");
    render(status, &FormPage::rejected(id, input, message))
}

fn render<T: Template>(status: StatusCode, page: &T) -> PageResult {
    Ok((status, Html(page.render()?)).into_response())
}
