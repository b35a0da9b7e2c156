//! # skywatch-adapters
//!
//! Data sources that feed weather readings and alerts to the skywatch
//! dashboard.
//!
//! The dashboard core only knows the [`WeatherSource`] trait: two fetch
//! operations and their failure modes. Transport details live here.
//!
//! ## Supported Sources
//!
//! - **HTTP** (`http` feature) - The weather backend's REST API
//!   (`/api/weather?city=...` and `/api/alerts`)
//! - **Mock** - Deterministic synthetic readings for demos and tests
//!
//! ## Quick Start (HTTP)
//!
//! ```rust,no_run
//! # #[cfg(feature = "http")]
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use skywatch_adapters::http::HttpWeatherSource;
//! use skywatch_adapters::WeatherSource;
//!
//! let source = HttpWeatherSource::builder()
//!     .endpoint("http://localhost:5001")
//!     .build()?;
//!
//! let readings = source.fetch_readings("Delhi").await?;
//! println!("Fetched {} readings", readings.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mock;

#[cfg(feature = "http")]
pub mod http;

use std::fmt::Debug;

use async_trait::async_trait;

pub use error::{FetchError, FetchErrorKind};
pub use mock::MockWeatherSource;

// Re-export types for convenience
pub use skywatch_types::{AlertRecord, ReadingRecord, Timestamp, WeatherCondition};

/// A provider of weather readings and alerts.
///
/// Implementations must be cancel-safe: the poller drops an in-flight fetch
/// future when its subscription is superseded or torn down.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Fetch the reading history for a city, oldest first.
    async fn fetch_readings(&self, city: &str) -> Result<Vec<ReadingRecord>, FetchError>;

    /// Fetch the global alert feed.
    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
