//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;
use serde_json::json;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Click Tracking
///
/// After the lookup succeeds a click event is pushed onto the bounded click
/// queue without waiting. If the queue is full or the worker is gone the
/// click is dropped with a warning; the redirect itself is never affected.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
/// Returns 500 Internal Server Error if the stored URL is not a valid
/// `Location` value; no click is recorded then.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.shortener.get_full_url(&short_id).await?;

    let location = HeaderValue::try_from(url).map_err(|e| {
        tracing::error!(short_id = %short_id, error = %e, "stored url is not a valid location");
        AppError::internal("get full url error: invalid redirect target", json!({}))
    })?;

    let ip = client_ip(&headers, addr, state.behind_proxy);
    match state.click_sender.try_send(ClickEvent::new(short_id, ip)) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            tracing::warn!(short_id = %event.short_id, "Click queue full, dropping click");
        }
        Err(TrySendError::Closed(event)) => {
            tracing::warn!(short_id = %event.short_id, "Click queue closed, dropping click");
        }
    }

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
