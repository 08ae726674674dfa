//! Click event model for asynchronous click tracking.

/// A redirect waiting to be recorded.
///
/// Created by the redirect handler and sent over a bounded channel to
/// [`crate::domain::click_worker::run_click_worker`], so the redirect response
/// never waits on the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub short_id: String,
    pub ip: String,
}

impl ClickEvent {
    /// Creates a new click event.
    ///
    /// # Arguments
    ///
    /// - `short_id` - The short id that was redirected
    /// - `ip` - Caller IP as text, or [`crate::utils::client_ip::UNKNOWN_IP`]
    pub fn new(short_id: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            ip: ip.into(),
        }
    }
}
