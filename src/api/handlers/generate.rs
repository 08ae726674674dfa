//! Handler for link creation.

use axum::{Json, extract::State};

use crate::api::dto::generate::{GenerateRequest, GenerateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /generate`
///
/// # Request Body
///
/// ```json
/// { "Url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "FullUrl": "https://example.com/some/long/path",
///   "ShortId": "AQ",
///   "StatId": "AZCJv3Xk7r2bn8eXgOqH1Q",
///   "ExpirationDate": "2026-11-19"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not a valid absolute URL.
/// Returns 500 Internal Server Error if the link cannot be stored.
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let link = state.shortener.generate_short_url(&payload.url).await?;

    Ok(Json(GenerateResponse::from(link)))
}
