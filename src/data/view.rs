//! The read-only view handed to renderers.

use chrono::DateTime;
use serde::Serialize;
use skywatch_adapters::FetchErrorKind;
use skywatch_types::{AlertRecord, ReadingRecord, Timestamp};

use super::aggregate::AggregateSummary;
use super::window::{self, TimeWindow};

/// Lifecycle of the selected city's readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

impl DashboardState {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardState::Idle => "idle",
            DashboardState::Loading => "loading",
            DashboardState::Ready => "ready",
            DashboardState::Error => "error",
        }
    }
}

/// One temperature point on the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time_label: String,
    pub timestamp: Timestamp,
    pub temperature: f64,
}

/// Everything a renderer needs for one frame.
///
/// Rebuilt whole on every change and shared behind an `Arc`; never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub selected_city: String,
    pub cities: Vec<String>,
    pub window: TimeWindow,
    pub state: DashboardState,
    pub latest_reading: Option<ReadingRecord>,
    pub summary: AggregateSummary,
    pub chart_series: Vec<ChartPoint>,
    pub alerts: Vec<AlertRecord>,
    pub loading: bool,
    pub error_state: Option<FetchErrorKind>,
    pub alerts_error: Option<FetchErrorKind>,
    /// When the selected city's readings last arrived.
    pub last_updated: Option<Timestamp>,
}

impl ViewModel {
    /// An empty view for `city` before any data has arrived.
    pub fn empty(city: impl Into<String>, cities: Vec<String>, window: TimeWindow) -> Self {
        Self {
            selected_city: city.into(),
            cities,
            window,
            state: DashboardState::Idle,
            latest_reading: None,
            summary: AggregateSummary::unavailable(),
            chart_series: Vec::new(),
            alerts: Vec::new(),
            loading: false,
            error_state: None,
            alerts_error: None,
            last_updated: None,
        }
    }

    /// Alerts concerning the selected city.
    pub fn city_alerts(&self) -> impl Iterator<Item = &AlertRecord> {
        self.alerts
            .iter()
            .filter(move |a| a.city.eq_ignore_ascii_case(&self.selected_city))
    }

    /// Whether stale data is being shown alongside an error.
    pub fn is_stale(&self) -> bool {
        self.error_state.is_some() && self.last_updated.is_some()
    }
}

/// Build the chart series for `window` ending at `now`.
///
/// Readings without a temperature are skipped rather than plotted as zero.
pub fn chart_series(readings: &[ReadingRecord], window: TimeWindow, now: Timestamp) -> Vec<ChartPoint> {
    window::filter(readings, window, now)
        .into_iter()
        .filter_map(|r| {
            r.temperature.map(|temperature| ChartPoint {
                time_label: time_label(r.timestamp, window),
                timestamp: r.timestamp,
                temperature,
            })
        })
        .collect()
}

/// Axis label for a point: `HH:MM` within a day, `MM-DD HH:MM` beyond (UTC).
pub fn time_label(timestamp: Timestamp, window: TimeWindow) -> String {
    let format = if window.is_multi_day() {
        "%m-%d %H:%M"
    } else {
        "%H:%M"
    };
    match DateTime::from_timestamp_millis(timestamp.as_millis()) {
        Some(dt) => dt.format(format).to_string(),
        None => "--:--".to_string(),
    }
}
