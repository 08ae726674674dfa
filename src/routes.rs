//! Top-level router combining the page, redirect and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Shortening form
//! - `GET  /heart/beat`       - Liveness probe
//! - `GET  /{short_id}`       - Short link redirect
//! - `POST /generate`         - Shorten a URL
//! - `GET  /stat/{stat_id}`   - Click statistics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, `GET`/`POST`/`HEAD`
//! - **Timeout** - Requests running longer than the configured limit get 408
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{front_handler, heartbeat_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on the time spent serving one request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    // `/heart/beat` has two segments, so it never collides with `/{short_id}`
    let router = Router::new()
        .route("/", get(front_handler))
        .route("/heart/beat", get(heartbeat_handler))
        .route("/{short_id}", get(redirect_handler))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
