//! Periodic retrieval of readings and alerts.
//!
//! A [`Fetcher`] performs one request for a key. A [`PollingSource`] turns a
//! fetcher into cancellable subscriptions that re-fetch on an interval and
//! stream [`PollStatus`] updates back to the dashboard.

mod polling;

pub use polling::{PollStatus, PollUpdate, PollingSource, Subscription};

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use skywatch_adapters::{FetchError, WeatherSource};
use skywatch_types::{AlertRecord, ReadingRecord};

/// One request against a data provider.
///
/// The future returned by `fetch` may be dropped at any await point when its
/// subscription is cancelled.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    /// What a subscription is keyed on (a city name, or `()` for global feeds).
    type Key: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Payload of a successful fetch.
    type Output: Send + 'static;

    async fn fetch(&self, key: &Self::Key) -> Result<Self::Output, FetchError>;
}

/// Fetches a city's reading history.
#[derive(Debug, Clone)]
pub struct ReadingsFetcher {
    source: Arc<dyn WeatherSource>,
}

impl ReadingsFetcher {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Fetcher for ReadingsFetcher {
    type Key = String;
    type Output = Vec<ReadingRecord>;

    async fn fetch(&self, city: &String) -> Result<Self::Output, FetchError> {
        self.source.fetch_readings(city).await
    }
}

/// Fetches the global alert feed.
#[derive(Debug, Clone)]
pub struct AlertsFetcher {
    source: Arc<dyn WeatherSource>,
}

impl AlertsFetcher {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Fetcher for AlertsFetcher {
    type Key = ();
    type Output = Vec<AlertRecord>;

    async fn fetch(&self, _key: &()) -> Result<Self::Output, FetchError> {
        self.source.fetch_alerts().await
    }
}
