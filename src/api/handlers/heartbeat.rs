//! Liveness probe.

use axum::http::StatusCode;

/// `GET /heart/beat` - always 200 with an empty body.
pub async fn heartbeat_handler() -> StatusCode {
    StatusCode::OK
}
