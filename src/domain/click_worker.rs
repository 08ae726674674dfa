//! Background click recording.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::application::services::ShortenerService;
use crate::domain::click_event::ClickEvent;
use crate::error::ShortenerError;

// delays of 50ms, 100ms, 200ms before jitter
const RETRY_BASE: u64 = 2;
const RETRY_FACTOR_MILLIS: u64 = 25;
const RETRY_MAX_DELAY: Duration = Duration::from_secs(2);
const MAX_RETRIES: usize = 3;

/// Drains the click queue, recording each event through `shortener`.
///
/// Up to `concurrency` events are stored at once. Transient storage failures
/// are retried with jittered exponential backoff; anything else (including a
/// click for a link that no longer exists) is logged and dropped. Failures
/// never reach the redirect that produced the event.
///
/// Returns once every sender is dropped and in-flight events have finished.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    shortener: Arc<ShortenerService>,
    concurrency: usize,
) {
    let limiter = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = limiter.clone().acquire_owned().await else {
            break;
        };

        let shortener = shortener.clone();
        in_flight.spawn(async move {
            let _permit = permit;
            record_click(&shortener, event).await;
        });

        // reap finished tasks so the set does not grow with the queue
        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}
    tracing::info!("Click worker stopped");
}

async fn record_click(shortener: &ShortenerService, event: ClickEvent) {
    let strategy = ExponentialBackoff::from_millis(RETRY_BASE)
        .factor(RETRY_FACTOR_MILLIS)
        .max_delay(RETRY_MAX_DELAY)
        .map(jitter)
        .take(MAX_RETRIES);

    let result = RetryIf::spawn(
        strategy,
        || shortener.register_click(&event.short_id, &event.ip),
        |e: &ShortenerError| {
            let retry = e.is_transient();
            if retry {
                tracing::warn!(short_id = %event.short_id, error = %e, "retrying click");
            }
            retry
        },
    )
    .await;

    match result {
        Ok(()) => {
            tracing::debug!(short_id = %event.short_id, ip = %event.ip, "Click registered");
        }
        Err(e) => {
            tracing::error!(
                short_id = %event.short_id,
                ip = %event.ip,
                error = %e,
                "can't register click"
            );
        }
    }
}
