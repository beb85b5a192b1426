use agenda_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub const MSG_MISSING_FIELDS: &str =
    "Los campos nombres, apellidos, fecha_nacimiento, celular y correo son obligatorios.";
pub const MSG_INVALID_EMAIL: &str = "El correo no tiene un formato válido";
pub const MSG_INVALID_DATE: &str = "La fecha de nacimiento debe tener el formato AAAA-MM-DD.";
pub const MSG_DUPLICATE_EMAIL: &str = "El correo ya está en uso.";
pub const MSG_SERVER_ERROR: &str = "Error del servidor.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the store and template
/// failures that only exist at this layer. Implements [`IntoResponse`] to
/// produce consistent JSON error responses; the HTML views go through
/// [`PageError`] instead but share [`AppError::classify`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agenda_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request the extractors could not parse (wrong content type,
    /// malformed body, non-numeric id).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An HTML template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map the error to an HTTP status, a stable error code and the message
    /// shown to the user.
    ///
    /// Server-side failures are logged here and reported with a sanitized
    /// message.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} no encontrado."),
                ),
                CoreError::MissingFields(_) => (
                    StatusCode::BAD_REQUEST,
                    "MISSING_FIELD",
                    MSG_MISSING_FIELDS.to_string(),
                ),
                CoreError::InvalidEmail(_) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_EMAIL",
                    MSG_INVALID_EMAIL.to_string(),
                ),
                CoreError::InvalidDate(_) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_DATE",
                    MSG_INVALID_DATE.to_string(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                internal_error()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Error returned by the HTML view handlers.
///
/// Renders as a plain-text page carrying the same status and message the
/// JSON API would report.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        Self(AppError::Database(err))
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        Self(AppError::Template(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.classify();
        (status, message).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        MSG_SERVER_ERROR.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - Unique violations map to 400 `DUPLICATE_EMAIL` (`correo` is the only
///   unique column besides the primary key).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if agenda_db::is_unique_violation(err) {
        return (
            StatusCode::BAD_REQUEST,
            "DUPLICATE_EMAIL",
            MSG_DUPLICATE_EMAIL.to_string(),
        );
    }
    tracing::error!(error = %err, "Database error");
    internal_error()
}
