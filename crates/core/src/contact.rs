//! Contact payload shape and the validation predicate applied before any
//! store access.
//!
//! Both the JSON API and the HTML forms deserialize into [`ContactPayload`],
//! so the two surfaces share exactly one set of rules.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Entity label used in not-found errors.
pub const CONTACT_ENTITY: &str = "Contacto";

/// Fields that must be present and non-empty, in reporting order.
pub const MANDATORY_FIELDS: [&str; 5] =
    ["nombres", "apellidos", "fecha_nacimiento", "celular", "correo"];

/// Accepted birth date format (ISO calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Raw request body for create and update, as submitted by a client.
///
/// Every field is optional at this stage; [`validate_contact`] decides what
/// is actually required. Empty strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub direccion: Option<String>,
    pub celular: Option<String>,
    pub correo: Option<String>,
}

/// A payload that passed validation, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub nombres: String,
    pub apellidos: String,
    pub fecha_nacimiento: NaiveDate,
    /// `None` when the submitted address was absent or empty.
    pub direccion: Option<String>,
    pub celular: String,
    pub correo: String,
}

/// Returns `true` when `email` has a basic `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a payload and convert it into a [`ValidatedContact`].
///
/// Checks run in order: mandatory fields (all missing ones are reported
/// together), email shape, then birth date format.
pub fn validate_contact(payload: &ContactPayload) -> Result<ValidatedContact, CoreError> {
    let fields = [
        present(&payload.nombres),
        present(&payload.apellidos),
        present(&payload.fecha_nacimiento),
        present(&payload.celular),
        present(&payload.correo),
    ];

    let missing: Vec<&'static str> = MANDATORY_FIELDS
        .iter()
        .zip(fields.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::MissingFields(missing));
    }

    let [Some(nombres), Some(apellidos), Some(fecha), Some(celular), Some(correo)] = fields
    else {
        return Err(CoreError::Internal(
            "mandatory field check out of sync".to_string(),
        ));
    };

    if !is_valid_email(correo) {
        return Err(CoreError::InvalidEmail(correo.to_string()));
    }

    let fecha_nacimiento = NaiveDate::parse_from_str(fecha, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(fecha.to_string()))?;

    Ok(ValidatedContact {
        nombres: nombres.to_string(),
        apellidos: apellidos.to_string(),
        fecha_nacimiento,
        direccion: present(&payload.direccion).map(str::to_string),
        celular: celular.to_string(),
        correo: correo.to_string(),
    })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn full_payload() -> ContactPayload {
        ContactPayload {
            nombres: Some("Ana".into()),
            apellidos: Some("Pérez".into()),
            fecha_nacimiento: Some("1990-05-17".into()),
            direccion: Some("Calle 1 #2-3".into()),
            celular: Some("3001234567".into()),
            correo: Some("ana@example.com".into()),
        }
    }

    #[test]
    fn accepts_complete_payload() {
        let contact = validate_contact(&full_payload()).unwrap();
        assert_eq!(contact.nombres, "Ana");
        assert_eq!(
            contact.fecha_nacimiento,
            NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()
        );
        assert_eq!(contact.direccion.as_deref(), Some("Calle 1 #2-3"));
    }

    #[test]
    fn address_is_optional() {
        let payload = ContactPayload {
            direccion: None,
            ..full_payload()
        };
        assert_eq!(validate_contact(&payload).unwrap().direccion, None);
    }

    #[test]
    fn empty_address_becomes_none() {
        let payload = ContactPayload {
            direccion: Some(String::new()),
            ..full_payload()
        };
        assert_eq!(validate_contact(&payload).unwrap().direccion, None);
    }

    #[test]
    fn missing_celular_is_rejected() {
        let payload = ContactPayload {
            celular: None,
            ..full_payload()
        };
        assert_matches!(
            validate_contact(&payload),
            Err(CoreError::MissingFields(fields)) if fields == vec!["celular"]
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let payload = ContactPayload {
            nombres: Some(String::new()),
            ..full_payload()
        };
        assert_matches!(
            validate_contact(&payload),
            Err(CoreError::MissingFields(fields)) if fields == vec!["nombres"]
        );
    }

    #[test]
    fn reports_every_missing_field_in_order() {
        let err = validate_contact(&ContactPayload::default()).unwrap_err();
        assert_matches!(err, CoreError::MissingFields(fields) if fields == MANDATORY_FIELDS.to_vec());
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let payload = ContactPayload {
            apellidos: None,
            correo: Some("not-an-email".into()),
            ..full_payload()
        };
        assert_matches!(validate_contact(&payload), Err(CoreError::MissingFields(_)));
    }

    #[test]
    fn rejects_malformed_email() {
        let payload = ContactPayload {
            correo: Some("ana.example.com".into()),
            ..full_payload()
        };
        assert_matches!(validate_contact(&payload), Err(CoreError::InvalidEmail(e)) if e == "ana.example.com");
    }

    #[test]
    fn rejects_unparseable_birth_date() {
        let payload = ContactPayload {
            fecha_nacimiento: Some("17/05/1990".into()),
            ..full_payload()
        };
        assert_matches!(validate_contact(&payload), Err(CoreError::InvalidDate(_)));
    }

    #[test]
    fn rejects_impossible_birth_date() {
        let payload = ContactPayload {
            fecha_nacimiento: Some("1990-02-30".into()),
            ..full_payload()
        };
        assert_matches!(validate_contact(&payload), Err(CoreError::InvalidDate(_)));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn payload_deserializes_with_absent_fields() {
        let payload: ContactPayload =
            serde_json::from_str(r#"{"nombres": "Ana", "correo": "ana@example.com"}"#).unwrap();
        assert_eq!(payload.nombres.as_deref(), Some("Ana"));
        assert!(payload.celular.is_none());
    }
}
