//! Interval polling with skip-if-busy scheduling and supersession.
//!
//! Each subscription owns one background task:
//!
//! ```text
//! loop {
//!     send Loading
//!     await fetch(key)            <- only suspension point besides the timer
//!     send Success(data) | Error(kind)
//!     sleep(interval)             <- measured from completion
//! }
//! ```
//!
//! The timer only starts after a fetch completes, so there is never more than
//! one request in flight per subscription; a slow fetch pushes the next one
//! back instead of queueing another. Errors do not end the loop, which gives
//! automatic retry on the same cadence.
//!
//! Dropping a [`Subscription`] aborts its task (cancelling any in-flight
//! fetch and pending timer) and drops the receiving end of its channel, so
//! nothing is delivered after unsubscribe.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use skywatch_adapters::FetchErrorKind;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;

use super::Fetcher;

/// Status of a polled resource.
#[derive(Debug, Clone, PartialEq)]
pub enum PollStatus<T> {
    /// Subscribed, nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    Success(T),
    Error(FetchErrorKind),
}

impl<T> PollStatus<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PollStatus<U> {
        match self {
            PollStatus::Idle => PollStatus::Idle,
            PollStatus::Loading => PollStatus::Loading,
            PollStatus::Success(data) => PollStatus::Success(f(data)),
            PollStatus::Error(kind) => PollStatus::Error(kind),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PollStatus::Loading)
    }
}

/// A status change, tagged with the request it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PollUpdate<K, T> {
    pub key: K,
    /// Which subscription produced this update; increases on every subscribe.
    pub generation: u64,
    pub status: PollStatus<T>,
}

/// Spawns polling subscriptions for one fetcher.
pub struct PollingSource<F: Fetcher> {
    fetcher: Arc<F>,
    generation: u64,
}

impl<F: Fetcher> fmt::Debug for PollingSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollingSource")
            .field("generation", &self.generation)
            .finish()
    }
}

impl<F: Fetcher> PollingSource<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            generation: 0,
        }
    }

    /// Start polling `key` every `interval`, beginning immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe(&mut self, key: F::Key, interval: Duration) -> Subscription<F> {
        self.generation += 1;
        let generation = self.generation;
        let (tx, rx) = mpsc::channel(16);

        tracing::debug!(?key, generation, ?interval, "Starting poll subscription");
        let handle = tokio::spawn(poll_loop(
            self.fetcher.clone(),
            key.clone(),
            generation,
            interval,
            tx,
        ));

        Subscription {
            key,
            generation,
            receiver: rx,
            handle,
            status: PollStatus::Idle,
        }
    }

    /// Generation of the most recent subscription (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

async fn poll_loop<F: Fetcher>(
    fetcher: Arc<F>,
    key: F::Key,
    generation: u64,
    interval: Duration,
    tx: mpsc::Sender<PollUpdate<F::Key, F::Output>>,
) {
    let update = |status| PollUpdate {
        key: key.clone(),
        generation,
        status,
    };

    loop {
        if tx.send(update(PollStatus::Loading)).await.is_err() {
            break;
        }

        let status = match fetcher.fetch(&key).await {
            Ok(data) => PollStatus::Success(data),
            Err(e) => {
                tracing::warn!(?key, generation, error = %e, "Fetch failed; will retry");
                PollStatus::Error(e.kind())
            }
        };

        if tx.send(update(status)).await.is_err() {
            // Receiver dropped
            break;
        }

        tokio::time::sleep(interval).await;
    }
}

/// A live polling subscription.
///
/// Dropping it unsubscribes.
pub struct Subscription<F: Fetcher> {
    key: F::Key,
    generation: u64,
    receiver: mpsc::Receiver<PollUpdate<F::Key, F::Output>>,
    handle: JoinHandle<()>,
    status: PollStatus<()>,
}

impl<F: Fetcher> fmt::Debug for Subscription<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("generation", &self.generation)
            .field("status", &self.status)
            .finish()
    }
}

impl<F: Fetcher> Subscription<F> {
    pub fn key(&self) -> &F::Key {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Latest status seen through this handle, without its payload.
    pub fn status(&self) -> &PollStatus<()> {
        &self.status
    }

    /// Take the next pending update without blocking.
    pub fn try_next(&mut self) -> Option<PollUpdate<F::Key, F::Output>> {
        match self.receiver.try_recv() {
            Ok(update) => Some(self.observe(update)),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next update.
    ///
    /// Returns `None` only if the polling task has stopped.
    pub async fn next(&mut self) -> Option<PollUpdate<F::Key, F::Output>> {
        let update = self.receiver.recv().await?;
        Some(self.observe(update))
    }

    fn observe(&mut self, update: PollUpdate<F::Key, F::Output>) -> PollUpdate<F::Key, F::Output> {
        self.status = match &update.status {
            PollStatus::Idle => PollStatus::Idle,
            PollStatus::Loading => PollStatus::Loading,
            PollStatus::Success(_) => PollStatus::Success(()),
            PollStatus::Error(kind) => PollStatus::Error(*kind),
        };
        update
    }

    /// Stop polling. Equivalent to dropping the subscription.
    pub fn unsubscribe(self) {}
}

impl<F: Fetcher> Drop for Subscription<F> {
    fn drop(&mut self) {
        self.handle.abort();
        self.receiver.close();
    }
}
