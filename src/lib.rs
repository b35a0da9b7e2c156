//! # skywatch
//!
//! A terminal dashboard and library for near-real-time city weather.
//!
//! This crate polls a weather backend for the selected city's reading
//! history and a global alert feed, reduces the readings to summary
//! statistics and a windowed temperature trend, and renders the result in
//! an interactive terminal UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌───────────┐    ┌──────────┐    ┌────────┐ │
//! │  │  app    │───▶│ dashboard │───▶│   data   │───▶│   ui   │ │
//! │  │ (input) │    │  (state)  │    │(ViewModel)    │(render)│ │
//! │  └─────────┘    └─────┬─────┘    └──────────┘    └────────┘ │
//! │                       │                                     │
//! │                       ▼                                     │
//! │                  ┌─────────┐                                │
//! │                  │ source  │◀── HttpWeatherSource |         │
//! │                  │(polling)│    MockWeatherSource           │
//! │                  └─────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`dashboard`]**: [`DashboardController`], the single owner of selection
//!   and fetch state, publishing an immutable [`ViewModel`]
//! - **[`source`]**: [`PollingSource`] subscriptions that re-fetch on an
//!   interval with at most one request in flight
//! - **[`data`]**: Pure processing: [`summarize`], window [`filter`]ing and
//!   chart series construction
//! - **[`config`]**: Layered [`Settings`] from file, environment and flags
//! - **[`app`]** / **[`events`]**: Terminal shell and key bindings
//! - **[`ui`]**: Rendering with ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Poll the backend at the default endpoint
//! skywatch --endpoint http://localhost:5001
//!
//! # Synthetic data, no backend required
//! skywatch --demo
//!
//! # Fetch once and write the view as JSON
//! skywatch --demo --city Mumbai --snapshot view.json
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use std::sync::Arc;
//! use skywatch::{DashboardController, DashboardOptions, MockWeatherSource};
//!
//! # tokio_test::block_on(async {
//! let cities = vec!["Delhi".to_string(), "Mumbai".to_string()];
//! let source = Arc::new(MockWeatherSource::new(cities.clone()));
//! let mut dashboard = DashboardController::new(
//!     source,
//!     DashboardOptions { cities, ..Default::default() },
//! )?;
//!
//! dashboard.start();
//! while dashboard.next_update().await {
//!     let view = dashboard.view();
//!     println!("{} {}: {}", view.selected_city, view.state.label(), view.summary.avg_temp);
//! }
//! # Ok::<_, anyhow::Error>(())
//! # });
//! ```

pub mod app;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{write_snapshot, App};
pub use config::{Overrides, Settings};
pub use dashboard::{Clock, DashboardController, DashboardOptions, FixedClock, SystemClock};
pub use data::{
    filter, summarize, AggregateSummary, ChartPoint, DashboardState, Stat, TimeWindow, ViewModel,
};
pub use source::{Fetcher, PollStatus, PollUpdate, PollingSource, Subscription};

pub use skywatch_adapters::{FetchError, FetchErrorKind, MockWeatherSource, WeatherSource};
#[cfg(feature = "http")]
pub use skywatch_adapters::http::HttpWeatherSource;
pub use skywatch_types::{AlertRecord, ReadingRecord, Timestamp, WeatherCondition};
