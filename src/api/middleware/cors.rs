//! Cross-origin access for browser clients.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call the public endpoints with `GET`, `POST` and
/// `HEAD`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::HEAD])
        .allow_headers(Any)
}
