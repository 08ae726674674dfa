//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Months, Utc};

/// How long a link is advertised as valid after creation.
///
/// The expiration date is informational only; nothing refuses a redirect or
/// removes a link once it passes.
pub const LINK_LIFETIME: Months = Months::new(1);

/// Calendar-date format used for expiration dates in responses.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A shortened URL.
///
/// `short_id` is derived from `id` and `stat_id` from a random value; both are
/// unique and never change once the link exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub short_id: String,
    pub stat_id: String,
    pub url: String,
    pub expiration_date: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_id: String,
        stat_id: String,
        url: String,
        expiration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_id,
            stat_id,
            url,
            expiration_date,
        }
    }

    /// Expiration date as `YYYY-MM-DD`.
    pub fn expiration_day(&self) -> String {
        self.expiration_date.format(DATE_FORMAT).to_string()
    }
}

/// Expiration date for a link created at `created_at`.
///
/// Adds one calendar month, clamping to the last day of a shorter month
/// (January 31st expires on the last day of February).
pub fn expiration_from(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at
        .checked_add_months(LINK_LIFETIME)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
