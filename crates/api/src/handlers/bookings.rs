//! Handlers for booking creation, status updates, and the volunteer schedule.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use wings_core::error::CoreError;
use wings_core::types::{DbId, Timestamp};
use wings_db::models::booking::{Booking, CreateBooking, VolunteerBooking};
use wings_db::repositories::BookingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /volunteers/bookings`.
///
/// Mandatory fields are `Option` so a missing one surfaces as a 400 with the
/// catch-all message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub volunteer_id: Option<DbId>,
    pub elderly_id: Option<DbId>,
    pub service_type: Option<String>,
    pub description: Option<String>,
    pub is_emergency: Option<bool>,
}

/// Request body for `PUT /volunteers/bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Receipt returned on booking creation: just enough for the client to
/// confirm the request and poll its status later.
#[derive(Debug, Serialize)]
pub struct BookingReceipt {
    pub id: DbId,
    pub booking_time: Timestamp,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/volunteers/bookings
///
/// Record a new booking. Starts `pending` with `booking_time` stamped by the
/// storage layer. Returns a [`BookingReceipt`] with 201 Created.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingReceipt>)> {
    // 1. Both party IDs and a non-empty service type are mandatory. Nothing
    //    is written when any of them is missing.
    let (volunteer_id, elderly_id, service_type) =
        match (input.volunteer_id, input.elderly_id, input.service_type) {
            (Some(v), Some(e), Some(s)) if !s.is_empty() => (v, e, s),
            _ => {
                return Err(AppError::Core(CoreError::Validation(
                    "Missing required fields".into(),
                )))
            }
        };

    let create_dto = CreateBooking {
        volunteer_id,
        elderly_id,
        service_type,
        description: input.description.unwrap_or_default(),
        is_emergency: input.is_emergency.unwrap_or(false),
    };

    let booking = BookingRepo::create(&state.pool, &create_dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingReceipt {
            id: booking.id,
            booking_time: booking.booking_time,
            status: booking.status,
        }),
    ))
}

/// PUT /api/v1/volunteers/bookings/{id}/status
///
/// Set a booking's status, stamping `completed_at` when the new status is
/// `completed`. Returns the full updated row.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<Booking>> {
    let booking = BookingRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;

    Ok(Json(booking))
}

/// GET /api/v1/volunteers/bookings/{id}
///
/// List the volunteer's bookings, newest first, with the requesting elderly
/// user's contact details joined in.
pub async fn list_for_volunteer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<VolunteerBooking>>> {
    let bookings = BookingRepo::list_for_volunteer(&state.pool, id).await?;
    Ok(Json(bookings))
}
