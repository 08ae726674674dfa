//! Shared state handed to every request handler.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::ShortenerService;
use crate::domain::click_event::ClickEvent;

/// Application state cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Producer side of the click queue drained by the click worker.
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Read the client IP from proxy headers instead of the peer address.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        click_sender: mpsc::Sender<ClickEvent>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            shortener,
            click_sender,
            behind_proxy,
        }
    }
}
