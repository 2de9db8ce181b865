//! Handlers for the `/volunteers` account resource (registration, login,
//! profile management, directory listing).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use wings_core::error::CoreError;
use wings_core::types::DbId;
use wings_db::models::volunteer::{
    CreateVolunteer, UpdateVolunteerProfile, VolunteerResponse, VolunteerSummary,
};
use wings_db::repositories::VolunteerRepo;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length enforced on registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /volunteers/register`.
///
/// Required fields are `Option` so a missing one surfaces as a 400 with the
/// catch-all message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterVolunteerRequest {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub has_experience: bool,
    pub experience_details: Option<String>,
    pub id_card_path: Option<String>,
    /// Base64 image data, stored as-is.
    pub profile_picture: Option<String>,
    pub place: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Required, but zero is a valid rate.
    pub price_per_hour: Option<f64>,
    pub interview_answers: Option<serde_json::Value>,
}

/// Request body for `POST /volunteers/login`.
#[derive(Debug, Deserialize)]
pub struct VolunteerLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `PUT /volunteers/profile/{id}`.
///
/// Accepts camelCase keys; this is the shape the web client has always sent
/// for profile edits, unlike registration which is snake_case.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
    pub has_experience: Option<bool>,
    pub experience_details: Option<String>,
    pub id_card_path: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/volunteers/register
///
/// Create a volunteer account. Validates required fields and password
/// strength, hashes the password, lowercases the email, and returns a safe
/// [`VolunteerResponse`] with 201 Created.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterVolunteerRequest>,
) -> AppResult<(StatusCode, Json<VolunteerResponse>)> {
    // 1. All mandatory fields must be present and non-blank.
    if blank(&input.full_name)
        || blank(&input.gender)
        || blank(&input.email)
        || blank(&input.phone_number)
        || blank(&input.password)
        || blank(&input.place)
        || blank(&input.state)
        || blank(&input.country)
        || input.price_per_hour.is_none()
    {
        return Err(AppError::Core(CoreError::Validation(
            "All required fields must be filled".into(),
        )));
    }

    let password = input.password.unwrap_or_default();
    validate_password_strength(&password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 2. Hash the password.
    let hashed = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // 3. Emails are stored lowercase so login lookups are case-insensitive.
    let email = input.email.unwrap_or_default().to_lowercase();

    let create_dto = CreateVolunteer {
        full_name: input.full_name.unwrap_or_default(),
        gender: input.gender.unwrap_or_default(),
        email,
        phone_number: input.phone_number.unwrap_or_default(),
        password_hash: hashed,
        has_experience: input.has_experience,
        experience_details: input.experience_details,
        id_card_path: input.id_card_path,
        profile_picture: input.profile_picture,
        place: input.place.unwrap_or_default(),
        state: input.state.unwrap_or_default(),
        country: input.country.unwrap_or_default(),
        price_per_hour: input.price_per_hour.unwrap_or_default(),
        interview_answers: input.interview_answers,
    };

    let volunteer = VolunteerRepo::create(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(volunteer.into())))
}

/// POST /api/v1/volunteers/login
///
/// Authenticate with email + password. Returns the account record.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<VolunteerLoginRequest>,
) -> AppResult<Json<VolunteerResponse>> {
    // 1. Both credentials must be present.
    if blank(&input.email) || blank(&input.password) {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password are required".into(),
        )));
    }
    let email = input.email.unwrap_or_default().to_lowercase();
    let password = input.password.unwrap_or_default();

    // 2. Look up the account. A missing account and a wrong password produce
    //    the same message so the response does not leak which emails exist.
    let volunteer = VolunteerRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 3. Verify password.
    let password_valid = verify_password(&password, &volunteer.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    Ok(Json(volunteer.into()))
}

/// GET /api/v1/volunteers/profile/{id}
///
/// Fetch a single volunteer's account record.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VolunteerResponse>> {
    let volunteer = VolunteerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }))?;

    Ok(Json(volunteer.into()))
}

/// PUT /api/v1/volunteers/profile/{id}
///
/// Partially update a volunteer's profile. Omitted fields are left unchanged.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<VolunteerResponse>> {
    let update_dto = UpdateVolunteerProfile {
        full_name: input.full_name,
        gender: input.gender,
        phone_number: input.phone_number,
        has_experience: input.has_experience,
        experience_details: input.experience_details,
        id_card_path: input.id_card_path,
    };

    let volunteer = VolunteerRepo::update_profile(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }))?;

    Ok(Json(volunteer.into()))
}

/// DELETE /api/v1/volunteers/profile/{id}
///
/// Delete a volunteer account. Offerings and bookings cascade. Returns 204.
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = VolunteerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }))
    }
}

/// GET /api/v1/volunteers/all
///
/// List every volunteer's directory summary, oldest account first.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<VolunteerSummary>>> {
    let summaries = VolunteerRepo::list_summaries(&state.pool).await?;
    Ok(Json(summaries))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// True when a required text field is absent or empty.
fn blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
