//! Volunteer account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wings_core::types::{DbId, Timestamp};

/// Full volunteer row from the `volunteer_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`VolunteerResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Volunteer {
    pub id: DbId,
    pub full_name: String,
    pub gender: String,
    /// Stored lowercase; callers normalize before insert or lookup.
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub has_experience: bool,
    pub experience_details: Option<String>,
    pub id_card_path: Option<String>,
    /// Base64 image data, stored as-is.
    pub profile_picture: Option<String>,
    pub place: String,
    pub state: String,
    pub country: String,
    pub price_per_hour: f64,
    pub interview_answers: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe volunteer representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerResponse {
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
}

impl From<Volunteer> for VolunteerResponse {
    fn from(v: Volunteer) -> Self {
        Self {
            id: v.id,
            full_name: v.full_name,
            gender: v.gender,
            email: v.email,
            phone_number: v.phone_number,
            has_experience: v.has_experience,
            experience_details: v.experience_details,
            id_card_path: v.id_card_path,
            profile_picture: v.profile_picture,
            place: v.place,
            state: v.state,
            country: v.country,
            price_per_hour: v.price_per_hour,
            interview_answers: v.interview_answers,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

/// Reduced row for the volunteer directory listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VolunteerSummary {
    pub id: DbId,
    pub full_name: String,
    pub gender: String,
    pub phone_number: String,
    pub has_experience: bool,
}

/// DTO for creating a new volunteer. `password_hash` is already hashed and
/// `email` already lowercased by the caller.
#[derive(Debug, Deserialize)]
pub struct CreateVolunteer {
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub has_experience: bool,
    pub experience_details: Option<String>,
    pub id_card_path: Option<String>,
    pub profile_picture: Option<String>,
    pub place: String,
    pub state: String,
    pub country: String,
    pub price_per_hour: f64,
    pub interview_answers: Option<serde_json::Value>,
}

/// DTO for the partial profile update. All fields are optional; only the
/// editable subset of the account is exposed here.
#[derive(Debug, Deserialize)]
pub struct UpdateVolunteerProfile {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub has_experience: Option<bool>,
    pub experience_details: Option<String>,
    pub id_card_path: Option<String>,
}
