//! Route definitions for the `/volunteers` resource.
//!
//! Also carries the offering, availability, and booking routes, which the
//! clients address through the volunteer prefix.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{bookings, services, volunteer};
use crate::state::AppState;

/// Routes mounted at `/volunteers`.
///
/// ```text
/// POST   /register               -> register
/// POST   /login                  -> login
/// GET    /all                    -> list_all
///
/// GET    /profile/{id}           -> get_profile
/// PUT    /profile/{id}           -> update_profile
/// DELETE /profile/{id}           -> delete_account
///
/// GET    /services/{id}          -> list_offerings
/// POST   /services/{id}          -> replace_offerings (whole-set swap)
/// GET    /available              -> find_available (?service_type=&emergency=)
///
/// POST   /bookings               -> create
/// GET    /bookings/{id}          -> list_for_volunteer
/// PUT    /bookings/{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(volunteer::register))
        .route("/login", post(volunteer::login))
        .route("/all", get(volunteer::list_all))
        .route(
            "/profile/{id}",
            get(volunteer::get_profile)
                .put(volunteer::update_profile)
                .delete(volunteer::delete_account),
        )
        .route(
            "/services/{id}",
            get(services::list_offerings).post(services::replace_offerings),
        )
        .route("/available", get(services::find_available))
        .route("/bookings", post(bookings::create))
        .route("/bookings/{id}", get(bookings::list_for_volunteer))
        .route("/bookings/{id}/status", put(bookings::update_status))
}
