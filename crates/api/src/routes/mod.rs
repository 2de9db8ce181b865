pub mod elderly;
pub mod health;
pub mod volunteer;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /volunteers/register               volunteer registration (public)
/// /volunteers/login                  volunteer login (public)
/// /volunteers/all                    volunteer directory
/// /volunteers/profile/{id}           get, update, delete account
/// /volunteers/services/{id}          list, replace offering set
/// /volunteers/available              availability match (?service_type=&emergency=)
/// /volunteers/bookings               create booking (POST)
/// /volunteers/bookings/{id}          volunteer's booking schedule (GET)
/// /volunteers/bookings/{id}/status   set booking status (PUT)
///
/// /elderly/register                  elderly registration (public)
/// /elderly/login                     elderly login (public)
/// /elderly/details                   first elderly contact card
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Volunteer accounts, offerings, availability, and bookings.
        .nest("/volunteers", volunteer::router())
        // Elderly accounts and contact details.
        .nest("/elderly", elderly::router())
}
