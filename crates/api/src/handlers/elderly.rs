//! Handlers for the `/elderly` account resource (registration, login,
//! contact details).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wings_core::error::CoreError;
use wings_core::types::DbId;
use wings_db::models::elderly::{CreateElderly, ElderlyContact, ElderlyResponse};
use wings_db::repositories::ElderlyRepo;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length enforced on registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /elderly/register`.
///
/// Accepts camelCase keys; this is the shape the web client has always sent
/// for elderly accounts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterElderlyRequest {
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub address: Option<String>,
}

/// Request body for `POST /elderly/login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElderlyLoginRequest {
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

/// Response body for `POST /elderly/register`: just enough for the client
/// to confirm the account and proceed to login.
#[derive(Debug, Serialize)]
pub struct ElderlyRegistered {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/elderly/register
///
/// Create an elderly account. Validates password strength, hashes the
/// password, and returns the new account's id, name, and email with 201.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterElderlyRequest>,
) -> AppResult<(StatusCode, Json<ElderlyRegistered>)> {
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateElderly {
        full_name: input.full_name,
        gender: input.gender,
        email: input.email,
        password_hash: hashed,
        phone_number: input.phone_number,
        address: input.address,
    };

    let elderly = ElderlyRepo::create(&state.pool, &create_dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ElderlyRegistered {
            id: elderly.id,
            full_name: elderly.full_name,
            email: elderly.email,
        }),
    ))
}

/// POST /api/v1/elderly/login
///
/// Authenticate with phone number + password. Returns the account record.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<ElderlyLoginRequest>,
) -> AppResult<Json<ElderlyResponse>> {
    // 1. Both credentials must be present.
    let (phone_number, password) = match (input.phone_number, input.password) {
        (Some(p), Some(w)) if !p.is_empty() && !w.is_empty() => (p, w),
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Phone number and password are required".into(),
            )))
        }
    };

    // 2. Look up the account. A missing account and a wrong password produce
    //    the same message so the response does not leak which numbers exist.
    let elderly = ElderlyRepo::find_by_phone(&state.pool, &phone_number)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid phone number or password".into(),
            ))
        })?;

    // 3. Verify password.
    let password_valid = verify_password(&password, &elderly.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid phone number or password".into(),
        )));
    }

    Ok(Json(elderly.into()))
}

/// GET /api/v1/elderly/details
///
/// Contact card of the earliest-registered elderly account. Placeholder
/// until per-session account resolution exists; clients only render the
/// name, phone, and address fields.
pub async fn details(State(state): State<AppState>) -> AppResult<Json<ElderlyContact>> {
    let contact = ElderlyRepo::first_contact(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Elderly user not found".into()))?;

    Ok(Json(contact))
}
