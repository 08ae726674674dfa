//! Aggregated statistics for one link.

use chrono::{DateTime, Utc};

use super::click::Click;
use super::link::DATE_FORMAT;

/// Upper bound on the recent clicks returned with [`Stats`].
pub const RECENT_CLICKS_LIMIT: i64 = 100;

/// Click statistics for a link, looked up by its stat id.
///
/// `click_count` covers every click ever recorded; `recent_clicks` holds at
/// most [`RECENT_CLICKS_LIMIT`] of them, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub short_id: String,
    pub click_count: i64,
    pub expiration_date: Option<DateTime<Utc>>,
    pub recent_clicks: Vec<Click>,
}

impl Stats {
    /// Expiration date as `YYYY-MM-DD`, or an empty string when unset.
    pub fn expiration_day(&self) -> String {
        self.expiration_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}
