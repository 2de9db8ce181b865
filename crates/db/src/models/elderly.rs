//! Elderly account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wings_core::types::{DbId, Timestamp};

/// Full elderly row from the `elderly_users` table.
///
/// Contains the password hash -- use [`ElderlyResponse`] for API output.
#[derive(Debug, Clone, FromRow)]
pub struct Elderly {
    pub id: DbId,
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe elderly representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct ElderlyResponse {
    pub id: DbId,
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Elderly> for ElderlyResponse {
    fn from(e: Elderly) -> Self {
        Self {
            id: e.id,
            full_name: e.full_name,
            gender: e.gender,
            email: e.email,
            phone_number: e.phone_number,
            address: e.address,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Contact card returned by the details endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ElderlyContact {
    pub full_name: String,
    pub phone_number: String,
    pub address: Option<String>,
}

/// DTO for creating a new elderly account. `password_hash` is already
/// hashed by the caller.
#[derive(Debug, Deserialize)]
pub struct CreateElderly {
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub address: Option<String>,
}
