//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Date-time format used for click times in responses.
pub const CLICK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recorded redirect.
///
/// Clicks are append-only. They disappear only together with their link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub ip: String,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(ip: String, clicked_at: DateTime<Utc>) -> Self {
        Self { ip, clicked_at }
    }

    /// Click time as `YYYY-MM-DD HH:MM:SS`.
    pub fn formatted_time(&self) -> String {
        self.clicked_at.format(CLICK_TIME_FORMAT).to_string()
    }
}
