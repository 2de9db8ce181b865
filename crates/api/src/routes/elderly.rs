//! Route definitions for the `/elderly` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::elderly;
use crate::state::AppState;

/// Routes mounted at `/elderly`.
///
/// ```text
/// POST /register  -> register
/// POST /login     -> login
/// GET  /details   -> details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(elderly::register))
        .route("/login", post(elderly::login))
        .route("/details", get(elderly::details))
}
