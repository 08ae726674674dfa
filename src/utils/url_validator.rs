//! Destination URL validation.
//!
//! Links accept any syntactically valid absolute URL. The URL is only parsed
//! for validation; the caller's original string is what gets stored and
//! redirected to.

use url::{ParseError, Url};

/// Errors that can occur while validating a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    /// The parser strips tabs and newlines; the stored string would keep them.
    #[error("URL contains control characters")]
    ControlCharacters,

    #[error("URL must be absolute: {0}")]
    NotAbsolute(String),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` is an absolute URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input,
/// [`UrlValidationError::ControlCharacters`] if any ASCII control character
/// is present, [`UrlValidationError::NotAbsolute`] for relative references and
/// [`UrlValidationError::InvalidFormat`] for anything the parser rejects.
///
/// # Examples
///
/// ```
/// use linkstat::utils::url_validator::validate_absolute_url;
///
/// assert!(validate_absolute_url("http://example.com/a").is_ok());
/// assert!(validate_absolute_url("not a url").is_err());
/// ```
pub fn validate_absolute_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacters);
    }

    Url::parse(input).map_err(|e| match e {
        ParseError::RelativeUrlWithoutBase => UrlValidationError::NotAbsolute(input.to_string()),
        other => UrlValidationError::InvalidFormat(other.to_string()),
    })
}
