//! Handlers for a volunteer's service offerings and the availability match.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use wings_core::error::CoreError;
use wings_core::types::DbId;
use wings_db::models::service_offering::{AvailableVolunteer, Offering};
use wings_db::repositories::{ServiceOfferingRepo, VolunteerRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /volunteers/services/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReplaceOfferingsRequest {
    pub services: Vec<Offering>,
}

/// Query parameters for `GET /volunteers/available`.
#[derive(Debug, Deserialize)]
pub struct AvailableQuery {
    pub service_type: Option<String>,
    pub emergency: Option<bool>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/volunteers/services/{id}
///
/// List the volunteer's current offerings. An unknown volunteer yields an
/// empty list, not a 404.
pub async fn list_offerings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Offering>>> {
    let rows = ServiceOfferingRepo::list_for_volunteer(&state.pool, id).await?;

    let offerings = rows
        .into_iter()
        .map(|row| Offering {
            service_type: row.service_type,
            is_available: row.is_available,
        })
        .collect();

    Ok(Json(offerings))
}

/// POST /api/v1/volunteers/services/{id}
///
/// Replace the volunteer's whole offering set with the submitted one.
/// Returns 204 No Content.
pub async fn replace_offerings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceOfferingsRequest>,
) -> AppResult<StatusCode> {
    // 1. The volunteer must exist before the set is touched.
    if !VolunteerRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }));
    }

    // 2. Swap the set in one transaction; an empty list clears it.
    ServiceOfferingRepo::replace_for_volunteer(&state.pool, id, &input.services).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/volunteers/available
///
/// Find volunteers currently offering the requested service type. With
/// `emergency=true`, volunteers who opted out of Hospital Visit work are
/// excluded even when they match on the requested type.
pub async fn find_available(
    State(state): State<AppState>,
    Query(params): Query<AvailableQuery>,
) -> AppResult<Json<Vec<AvailableVolunteer>>> {
    // An absent service type matches nothing.
    let Some(service_type) = params.service_type else {
        return Ok(Json(Vec::new()));
    };
    let emergency = params.emergency.unwrap_or(false);

    let volunteers =
        ServiceOfferingRepo::find_available(&state.pool, &service_type, emergency).await?;

    Ok(Json(volunteers))
}
