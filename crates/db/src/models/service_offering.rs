//! Service offering model and the availability-match row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wings_core::types::{DbId, Timestamp};

/// A row from the `volunteer_services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceOffering {
    pub id: DbId,
    pub volunteer_id: DbId,
    pub service_type: String,
    pub is_available: bool,
}

/// One offering as published by a volunteer: the wire shape for both
/// listing offerings and submitting a replacement set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    pub service_type: String,
    pub is_available: bool,
}

/// A volunteer matched by the availability query: the full account record
/// (minus the password hash) plus the offering columns that matched.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailableVolunteer {
    pub id: DbId,
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub has_experience: bool,
    pub experience_details: Option<String>,
    pub id_card_path: Option<String>,
    pub profile_picture: Option<String>,
    pub place: String,
    pub state: String,
    pub country: String,
    pub price_per_hour: f64,
    pub interview_answers: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub service_type: String,
    pub is_available: bool,
}
