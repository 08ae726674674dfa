//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count, expiration date and up to 100 most recent clicks
/// of the link owning `stat_id`, newest first.
///
/// # Endpoint
///
/// `GET /stat/{stat_id}`
///
/// # Response
///
/// ```json
/// {
///   "ClickCount": 2,
///   "ExpirationDate": "2026-11-19",
///   "Clicks": [
///     { "IP": "203.0.113.7", "Time": "2026-10-19 14:05:09" },
///     { "IP": "198.51.100.2", "Time": "2026-10-19 13:58:41" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the stat id doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(stat_id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.shortener.get_stats(&stat_id).await?;

    Ok(Json(StatsResponse::from(stats)))
}
