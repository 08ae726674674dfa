//! Identifier codec shared by short ids and stat ids.
//!
//! Both identifier kinds are raw byte sequences rendered as unpadded base64.
//! The alphabet is the standard one except for the last two symbols: index 62
//! is written as `_` and index 63 as `-`, so every token can be placed in a URL
//! path without escaping.
//!
//! Short ids come from the big-endian bytes of the row id with leading zero
//! bytes stripped, which keeps them as short as the id allows:
//!
//! | row id | bytes       | token  |
//! |--------|-------------|--------|
//! | 1      | `01`        | `AQ`   |
//! | 255    | `ff`        | `-w`   |
//! | 256    | `01 00`     | `AQA`  |
//! | 65536  | `01 00 00`  | `AQAA` |
//!
//! Stat ids come from a fresh UUIDv7 (millisecond timestamp plus random bits)
//! and are always 22 characters long.

use base64::Engine as _;
use base64::alphabet::Alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use uuid::Uuid;

const TOKEN_ALPHABET: Alphabet =
    match Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid token alphabet"),
    };

const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(&TOKEN_ALPHABET, NO_PAD);

/// Errors returned when a token cannot be turned back into bytes.
#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("Token is empty")]
    Empty,

    #[error("Malformed token: {0}")]
    Malformed(#[from] base64::DecodeError),
}

/// Encodes a row id into a short id.
///
/// Uses the minimal big-endian representation of `n`. Zero has no significant
/// bytes and encodes to the empty string; the store never hands out zero.
pub fn encode_id(n: u64) -> String {
    let bytes = n.to_be_bytes();
    let first_significant = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len());

    bytes_to_token(&bytes[first_significant..])
}

/// Generates a new stat id from a UUIDv7.
pub fn new_random_token() -> String {
    bytes_to_token(Uuid::now_v7().as_bytes())
}

/// Renders raw bytes as a URL-safe token.
pub fn bytes_to_token(bytes: &[u8]) -> String {
    TOKEN_ENGINE.encode(bytes)
}

/// Parses a token back into the bytes it was made from.
///
/// # Errors
///
/// Returns [`TokenDecodeError::Empty`] for an empty token and
/// [`TokenDecodeError::Malformed`] if it contains characters outside the
/// alphabet or has an impossible length.
pub fn decode_token(token: &str) -> Result<Vec<u8>, TokenDecodeError> {
    if token.is_empty() {
        return Err(TokenDecodeError::Empty);
    }

    Ok(TOKEN_ENGINE.decode(token)?)
}

/// Recovers the row id behind a short id.
///
/// Returns `None` if the token is malformed or longer than eight bytes.
pub fn decode_id(token: &str) -> Option<u64> {
    let bytes = decode_token(token).ok()?;
    if bytes.len() > 8 {
        return None;
    }

    Some(bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}
