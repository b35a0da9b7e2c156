//! Data models and pure processing for weather readings.
//!
//! Nothing in this module performs I/O or reads the clock; callers pass
//! `now` explicitly.
//!
//! ## Submodules
//!
//! - [`aggregate`]: Summary statistics ([`summarize`], [`AggregateSummary`], [`Stat`])
//! - [`window`]: Trailing time windows ([`TimeWindow`], [`filter`])
//! - [`view`]: The renderer-facing [`ViewModel`] and chart series
//! - [`format`]: Parsing and formatting of intervals (e.g., "300s", "5m")
//!
//! ## Data Flow
//!
//! ```text
//! Vec<ReadingRecord> (latest fetch)
//!        │
//!        ├──▶ summarize()            ──▶ AggregateSummary
//!        │
//!        └──▶ filter(window, now)    ──▶ chart_series() ──▶ Vec<ChartPoint>
//!                                                   │
//!                                                   ▼
//!                                              ViewModel
//! ```

pub mod aggregate;
pub mod format;
pub mod view;
pub mod window;

pub use aggregate::{round2, summarize, AggregateSummary, Stat};
pub use view::{chart_series, ChartPoint, DashboardState, ViewModel};
pub use window::{filter, TimeWindow};
