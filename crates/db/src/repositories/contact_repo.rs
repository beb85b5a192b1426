//! Repository for the `agenda` table.

use agenda_core::contact::ValidatedContact;
use agenda_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::Contact;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nombres, apellidos, fecha_nacimiento, direccion, celular, correo";

/// Provides CRUD operations for contacts.
///
/// Every method is a single statement; none of them opens a transaction.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    ///
    /// A duplicate `correo` fails with a unique violation on
    /// `uq_agenda_correo` (see [`crate::is_unique_violation`]).
    pub async fn create(pool: &PgPool, input: &ValidatedContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO agenda (nombres, apellidos, fecha_nacimiento, direccion, celular, correo)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.nombres)
            .bind(&input.apellidos)
            .bind(input.fecha_nacimiento)
            .bind(&input.direccion)
            .bind(&input.celular)
            .bind(&input.correo)
            .fetch_one(pool)
            .await
    }

    /// List all contacts ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agenda ORDER BY id ASC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Find a contact by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agenda WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable field of a contact.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ValidatedContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE agenda SET
                nombres = $2,
                apellidos = $3,
                fecha_nacimiento = $4,
                direccion = $5,
                celular = $6,
                correo = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.nombres)
            .bind(&input.apellidos)
            .bind(input.fecha_nacimiento)
            .bind(&input.direccion)
            .bind(&input.celular)
            .bind(&input.correo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM agenda WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
