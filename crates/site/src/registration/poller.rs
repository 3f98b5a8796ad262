//! Cancellable background polling of the attendee count.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::api::{ApiError, WorkshopClient};

/// Something that can report the current attendee count.
pub trait CountSource: Send + Sync + 'static {
    /// Fetch the current count.
    fn fetch_count(&self) -> impl Future<Output = Result<u64, ApiError>> + Send;
}

impl CountSource for WorkshopClient {
    fn fetch_count(&self) -> impl Future<Output = Result<u64, ApiError>> + Send {
        self.attendee_count()
    }
}

/// Polls a [`CountSource`] on a fixed interval and publishes the latest
/// count on a `watch` channel.
///
/// The first fetch happens immediately. A failed fetch is logged and the
/// previous value is kept. Polling stops on [`CountPoller::cancel`] or when
/// the poller is dropped.
#[derive(Debug)]
pub struct CountPoller {
    rx: watch::Receiver<u64>,
    handle: JoinHandle<()>,
}

impl CountPoller {
    /// Start polling `source` every `interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<S: CountSource>(source: S, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(0);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match source.fetch_count().await {
                    Ok(count) => {
                        tx.send_replace(count);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to fetch attendee count");
                    }
                }
            }
        });

        Self { rx, handle }
    }

    /// The most recently published count (0 until the first success).
    #[must_use]
    pub fn latest(&self) -> u64 {
        *self.rx.borrow()
    }

    /// A receiver notified on every successful fetch.
    ///
    /// Its `changed()` returns an error once polling has stopped.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.rx.clone()
    }

    /// Stop polling. In-flight fetches are abandoned.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the polling task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
