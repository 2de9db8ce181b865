//! Repository for the `elderly_users` table.

use sqlx::PgPool;

use crate::models::elderly::{CreateElderly, Elderly, ElderlyContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, full_name, gender, email, password_hash, phone_number, address, created_at, updated_at";

/// Provides CRUD operations for elderly accounts.
pub struct ElderlyRepo;

impl ElderlyRepo {
    /// Insert a new elderly account, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateElderly) -> Result<Elderly, sqlx::Error> {
        let query = format!(
            "INSERT INTO elderly_users \
                 (full_name, gender, email, password_hash, phone_number, address) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Elderly>(&query)
            .bind(&input.full_name)
            .bind(&input.gender)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.phone_number)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find an elderly account by phone number, the login credential.
    pub async fn find_by_phone(
        pool: &PgPool,
        phone_number: &str,
    ) -> Result<Option<Elderly>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM elderly_users WHERE phone_number = $1");
        sqlx::query_as::<_, Elderly>(&query)
            .bind(phone_number)
            .fetch_optional(pool)
            .await
    }

    /// Contact card of the earliest-registered elderly account, if any.
    pub async fn first_contact(pool: &PgPool) -> Result<Option<ElderlyContact>, sqlx::Error> {
        sqlx::query_as::<_, ElderlyContact>(
            "SELECT full_name, phone_number, address FROM elderly_users ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }
}
