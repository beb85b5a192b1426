//! Askama page templates for the HTML views.
//!
//! Template sources live in `crates/api/templates/`.

use agenda_core::contact::{ContactPayload, DATE_FORMAT};
use agenda_core::types::DbId;
use agenda_db::models::contact::Contact;
use askama::Template;

/// `GET /` -- table of every contact.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub contacts: Vec<Contact>,
}

/// Create/edit form, optionally with an inline error message.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormPage {
    /// Form submission target (`/crear` or `/editar/{id}`).
    pub action: String,
    pub title: &'static str,
    pub contact: ContactForm,
    pub error: Option<String>,
}

impl FormPage {
    /// Blank creation form.
    pub fn create() -> Self {
        Self::new(None, ContactForm::default(), None)
    }

    /// Edit form pre-filled from a stored contact.
    pub fn edit(contact: &Contact) -> Self {
        Self::new(Some(contact.id), ContactForm::from(contact), None)
    }

    /// Re-render a rejected submission with the values the user typed.
    pub fn rejected(id: Option<DbId>, payload: &ContactPayload, error: String) -> Self {
        Self::new(id, ContactForm::from(payload), Some(error))
    }

    fn new(id: Option<DbId>, contact: ContactForm, error: Option<String>) -> Self {
        let (action, title) = match id {
            Some(id) => (format!("/editar/{id}"), "Editar contacto"),
            None => ("/crear".to_string(), "Nuevo contacto"),
        };
        Self {
            action,
            title,
            contact,
            error,
        }
    }
}

/// Field values shown in the form inputs.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub nombres: String,
    pub apellidos: String,
    pub fecha_nacimiento: String,
    pub direccion: String,
    pub celular: String,
    pub correo: String,
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            nombres: contact.nombres.clone(),
            apellidos: contact.apellidos.clone(),
            fecha_nacimiento: contact.fecha_nacimiento.format(DATE_FORMAT).to_string(),
            direccion: contact.direccion.clone().unwrap_or_default(),
            celular: contact.celular.clone(),
            correo: contact.correo.clone(),
        }
    }
}

impl From<&ContactPayload> for ContactForm {
    fn from(payload: &ContactPayload) -> Self {
        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            nombres: value(&payload.nombres),
            apellidos: value(&payload.apellidos),
            fecha_nacimiento: value(&payload.fecha_nacimiento),
            direccion: value(&payload.direccion),
            celular: value(&payload.celular),
            correo: value(&payload.correo),
        }
    }
}
