//! Error types for every layer.
//!
//! - [`StorageError`] - raised by [`crate::domain::repositories::LinkRepository`]
//!   implementations
//! - [`ShortenerError`] - the same failure wrapped with the operation that
//!   produced it, raised by [`crate::application::services::ShortenerService`]
//! - [`AppError`] - HTTP-facing error rendered as a JSON body with a status code

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::url_validator::UrlValidationError;

/// Failure of a storage operation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The destination URL is not a valid absolute URL.
    #[error(transparent)]
    InvalidInput(#[from] UrlValidationError),

    /// No row matches the requested short id or stat id.
    #[error("{0}")]
    NotFound(&'static str),

    /// The engine handed back a row id that cannot be encoded.
    #[error("invalid row id {0}")]
    InvalidRowId(i64),

    /// Any transactional or connectivity failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    pub const SHORT_ID_NOT_FOUND: Self = Self::NotFound("short url doesn't exist");
    pub const STAT_ID_NOT_FOUND: Self = Self::NotFound("stat url doesn't exist");

    /// Returns true for failures worth retrying (connectivity, pool timeouts,
    /// lock contention). Validation and lookup misses never are.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Database(e) => !matches!(e, sqlx::Error::RowNotFound)
                && e.as_database_error().is_none_or(|db| {
                    !(db.is_foreign_key_violation()
                        || db.is_unique_violation()
                        || db.is_check_violation())
                }),
            _ => false,
        }
    }
}

/// A [`StorageError`] tagged with the service operation that raised it.
///
/// The `Display` output starts with a fixed per-operation prefix; the storage
/// failure stays reachable through [`ShortenerError::cause`] and
/// [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    #[error("generate short url error: {0}")]
    GenerateShortUrl(#[source] StorageError),

    #[error("get full url error: {0}")]
    GetFullUrl(#[source] StorageError),

    #[error("register click error: {0}")]
    RegisterClick(#[source] StorageError),

    #[error("get stats error: {0}")]
    GetStats(#[source] StorageError),
}

impl ShortenerError {
    /// The underlying storage failure.
    pub fn cause(&self) -> &StorageError {
        match self {
            Self::GenerateShortUrl(e)
            | Self::GetFullUrl(e)
            | Self::RegisterClick(e)
            | Self::GetStats(e) => e,
        }
    }

    /// The fixed message prefix of the failed operation.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::GenerateShortUrl(_) => "generate short url error",
            Self::GetFullUrl(_) => "get full url error",
            Self::RegisterClick(_) => "register click error",
            Self::GetStats(_) => "get stats error",
        }
    }

    pub fn is_transient(&self) -> bool {
        self.cause().is_transient()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// HTTP-facing error.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err.cause() {
            StorageError::InvalidInput(reason) => AppError::bad_request(
                err.to_string(),
                json!({ "reason": reason.to_string() }),
            ),
            StorageError::NotFound(_) => AppError::not_found(err.to_string(), json!({})),
            StorageError::InvalidRowId(_) | StorageError::Database(_) => {
                tracing::error!(error = %err, "storage failure");
                AppError::internal(format!("{}: storage failure", err.operation()), json!({}))
            }
        }
    }
}
