//! API route configuration.

use crate::api::handlers::{generate_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON endpoints.
///
/// # Endpoints
///
/// - `POST /generate`         - Shorten a URL
/// - `GET  /stat/{stat_id}`   - Click statistics of a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/stat/{stat_id}", get(stats_handler))
}
