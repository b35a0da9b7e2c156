//! The dashboard controller: selection state, polling wiring and the view.
//!
//! [`DashboardController`] is the only writer of dashboard state. It owns the
//! two polling subscriptions (readings for the selected city, the global
//! alert feed), applies their updates, and publishes an immutable
//! [`ViewModel`] that renderers read.
//!
//! ## State machine
//!
//! ```text
//!            start / select_city
//!   Idle ───────────────────────────▶ Loading
//!                                       │  ▲
//!                           Success     │  │ next retry
//!                   ┌───────────────────┘  │
//!                   ▼                      │
//!                 Ready ───── Error ─────▶ Error
//!                   ▲      (keeps last       │
//!                   │       good data)       │
//!                   └──────── Success ───────┘
//! ```
//!
//! Background refetches while `Ready` keep the state `Ready` and only raise
//! the view's `loading` flag. Alerts never drive the state machine; their
//! failures surface as `alerts_error`.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use skywatch_adapters::{FetchErrorKind, WeatherSource};
use skywatch_types::{AlertRecord, ReadingRecord, Timestamp};

use crate::data::{chart_series, summarize, DashboardState, TimeWindow, ViewModel};
use crate::source::{
    AlertsFetcher, PollStatus, PollUpdate, PollingSource, ReadingsFetcher, Subscription,
};

/// Source of the current instant for window filtering.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Construction parameters for a [`DashboardController`].
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub cities: Vec<String>,
    /// Initially selected city; the first city when `None`.
    pub initial_city: Option<String>,
    pub window: TimeWindow,
    pub readings_interval: Duration,
    pub alerts_interval: Duration,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            initial_city: None,
            window: TimeWindow::default(),
            readings_interval: Duration::from_secs(300),
            alerts_interval: Duration::from_secs(60),
        }
    }
}

type ReadingsUpdate = PollUpdate<String, Vec<ReadingRecord>>;
type AlertsUpdate = PollUpdate<(), Vec<AlertRecord>>;

/// Owns selection state and merges both polling loops into a [`ViewModel`].
#[derive(Debug)]
pub struct DashboardController {
    cities: Vec<String>,
    selected: String,
    window: TimeWindow,
    state: DashboardState,

    // Last good data for the selected city
    readings: Vec<ReadingRecord>,
    last_updated: Option<Timestamp>,
    readings_in_flight: bool,
    error: Option<FetchErrorKind>,

    alerts: Vec<AlertRecord>,
    alerts_error: Option<FetchErrorKind>,

    readings_interval: Duration,
    alerts_interval: Duration,
    readings_poller: PollingSource<ReadingsFetcher>,
    alerts_poller: PollingSource<AlertsFetcher>,
    readings_sub: Option<Subscription<ReadingsFetcher>>,
    alerts_sub: Option<Subscription<AlertsFetcher>>,

    clock: Arc<dyn Clock>,
    view: Arc<ViewModel>,
}

impl DashboardController {
    /// Create a controller over `source`. Nothing is fetched until [`start`](Self::start).
    pub fn new(source: Arc<dyn WeatherSource>, options: DashboardOptions) -> Result<Self> {
        if options.cities.is_empty() {
            bail!("At least one city must be configured");
        }
        if options.readings_interval.is_zero() || options.alerts_interval.is_zero() {
            bail!("Polling intervals must be greater than zero");
        }

        let selected = match options.initial_city {
            Some(city) => match find_city(&options.cities, &city) {
                Some(known) => known.to_string(),
                None => bail!("Unknown city: {}", city),
            },
            None => options.cities[0].clone(),
        };

        let view = Arc::new(ViewModel::empty(
            selected.clone(),
            options.cities.clone(),
            options.window,
        ));

        Ok(Self {
            cities: options.cities,
            selected,
            window: options.window,
            state: DashboardState::Idle,
            readings: Vec::new(),
            last_updated: None,
            readings_in_flight: false,
            error: None,
            alerts: Vec::new(),
            alerts_error: None,
            readings_interval: options.readings_interval,
            alerts_interval: options.alerts_interval,
            readings_poller: PollingSource::new(ReadingsFetcher::new(source.clone())),
            alerts_poller: PollingSource::new(AlertsFetcher::new(source)),
            readings_sub: None,
            alerts_sub: None,
            clock: Arc::new(SystemClock),
            view,
        })
    }

    /// Replace the clock used for window filtering.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self.rebuild();
        self
    }

    /// Subscribe both polling loops. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        if self.alerts_sub.is_none() {
            self.alerts_sub = Some(self.alerts_poller.subscribe((), self.alerts_interval));
        }
        if self.readings_sub.is_none() {
            self.subscribe_readings();
        }
        self.rebuild();
    }

    /// Tear down both subscriptions. Held data stays visible.
    pub fn stop(&mut self) {
        self.readings_sub = None;
        self.alerts_sub = None;
        self.readings_in_flight = false;
        self.rebuild();
    }

    /// The current view. Cheap to clone; never changes after being handed out.
    pub fn view(&self) -> Arc<ViewModel> {
        self.view.clone()
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    pub fn selected_city(&self) -> &str {
        &self.selected
    }

    pub fn readings_interval(&self) -> Duration {
        self.readings_interval
    }

    pub fn alerts_interval(&self) -> Duration {
        self.alerts_interval
    }

    /// Current time according to the controller's clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Switch to `city`, discarding the old city's data and polling afresh.
    ///
    /// Returns false if the city is unknown. Selecting the current city is a
    /// no-op that still returns true.
    pub fn select_city(&mut self, city: &str) -> bool {
        let Some(known) = find_city(&self.cities, city).map(str::to_string) else {
            tracing::debug!(city, "Ignoring unknown city");
            return false;
        };
        if known == self.selected {
            return true;
        }

        tracing::info!(from = %self.selected, to = %known, "Switching city");
        self.selected = known;
        self.readings.clear();
        self.last_updated = None;
        self.error = None;

        // Drop first so the old task is aborted before the new one starts.
        self.readings_sub = None;
        if self.alerts_sub.is_some() {
            self.subscribe_readings();
        } else {
            self.state = DashboardState::Idle;
            self.readings_in_flight = false;
        }
        self.rebuild();
        true
    }

    /// Change the chart window. Recomputes from held readings; never fetches.
    pub fn select_window(&mut self, window: TimeWindow) {
        if window != self.window {
            self.window = window;
            self.rebuild();
        }
    }

    /// Apply every pending update without blocking.
    ///
    /// Returns true if the view changed.
    pub fn refresh(&mut self) -> bool {
        let readings: Vec<ReadingsUpdate> = match self.readings_sub.as_mut() {
            Some(sub) => std::iter::from_fn(|| sub.try_next()).collect(),
            None => Vec::new(),
        };
        let alerts: Vec<AlertsUpdate> = match self.alerts_sub.as_mut() {
            Some(sub) => std::iter::from_fn(|| sub.try_next()).collect(),
            None => Vec::new(),
        };

        if readings.is_empty() && alerts.is_empty() {
            return false;
        }

        let mut changed = false;
        for update in readings {
            changed |= self.apply_readings(update);
        }
        for update in alerts {
            changed |= self.apply_alerts(update);
        }

        if changed {
            self.rebuild();
        }
        changed
    }

    /// Wait for the next update from either loop and apply it.
    ///
    /// Returns false if the readings loop is not running, including when its
    /// task has ended unexpectedly. A dead alerts loop is dropped and
    /// waiting continues on readings alone.
    pub async fn next_update(&mut self) -> bool {
        enum Next {
            Readings(Option<ReadingsUpdate>),
            Alerts(Option<AlertsUpdate>),
        }

        let Some(readings) = self.readings_sub.as_mut() else {
            return false;
        };
        let next = match self.alerts_sub.as_mut() {
            Some(alerts) => tokio::select! {
                u = readings.next() => Next::Readings(u),
                u = alerts.next() => Next::Alerts(u),
            },
            None => Next::Readings(readings.next().await),
        };

        let changed = match next {
            Next::Readings(Some(u)) => self.apply_readings(u),
            Next::Alerts(Some(u)) => self.apply_alerts(u),
            Next::Readings(None) => {
                tracing::warn!(city = %self.selected, "Readings polling ended unexpectedly");
                self.readings_sub = None;
                self.readings_in_flight = false;
                self.rebuild();
                return false;
            }
            Next::Alerts(None) => {
                tracing::warn!("Alerts polling ended unexpectedly");
                self.alerts_sub = None;
                false
            }
        };
        if changed {
            self.rebuild();
        }
        true
    }

    fn subscribe_readings(&mut self) {
        self.readings_sub = Some(
            self.readings_poller
                .subscribe(self.selected.clone(), self.readings_interval),
        );
        self.state = DashboardState::Loading;
        self.readings_in_flight = true;
    }

    fn apply_readings(&mut self, update: ReadingsUpdate) -> bool {
        let current = self.readings_sub.as_ref().map(|s| s.generation());
        if update.key != self.selected || Some(update.generation) != current {
            tracing::debug!(
                key = %update.key,
                generation = update.generation,
                selected = %self.selected,
                "Discarding superseded readings update"
            );
            return false;
        }

        match update.status {
            PollStatus::Idle => false,
            PollStatus::Loading => {
                self.readings_in_flight = true;
                if matches!(self.state, DashboardState::Idle | DashboardState::Error) {
                    self.state = DashboardState::Loading;
                }
                true
            }
            PollStatus::Success(readings) => {
                tracing::debug!(city = %self.selected, count = readings.len(), "Readings updated");
                self.readings = readings;
                self.last_updated = Some(self.clock.now());
                self.readings_in_flight = false;
                self.error = None;
                self.state = DashboardState::Ready;
                true
            }
            PollStatus::Error(kind) => {
                self.readings_in_flight = false;
                self.error = Some(kind);
                self.state = DashboardState::Error;
                true
            }
        }
    }

    fn apply_alerts(&mut self, update: AlertsUpdate) -> bool {
        match update.status {
            PollStatus::Idle | PollStatus::Loading => false,
            PollStatus::Success(alerts) => {
                self.alerts = alerts;
                self.alerts_error = None;
                true
            }
            PollStatus::Error(kind) => {
                self.alerts_error = Some(kind);
                true
            }
        }
    }

    fn rebuild(&mut self) {
        let now = self.clock.now();
        self.view = Arc::new(ViewModel {
            selected_city: self.selected.clone(),
            cities: self.cities.clone(),
            window: self.window,
            state: self.state,
            latest_reading: self.readings.last().cloned(),
            summary: summarize(&self.readings),
            chart_series: chart_series(&self.readings, self.window, now),
            alerts: self.alerts.clone(),
            loading: self.state == DashboardState::Loading || self.readings_in_flight,
            error_state: self.error,
            alerts_error: self.alerts_error,
            last_updated: self.last_updated,
        });
    }
}

fn find_city<'a>(cities: &'a [String], city: &str) -> Option<&'a str> {
    cities
        .iter()
        .find(|c| c.eq_ignore_ascii_case(city.trim()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use skywatch_adapters::FetchError;
    use tokio::sync::Notify;

    use crate::data::Stat;

    const NOW: i64 = 1_700_000_000;

    /// Scripted weather source. Per-city gates hold a fetch until released.
    #[derive(Debug, Default)]
    struct FakeSource {
        readings: Mutex<HashMap<String, Result<Vec<ReadingRecord>, FetchError>>>,
        alerts: Mutex<Option<Result<Vec<AlertRecord>, FetchError>>>,
        gates: Mutex<HashMap<String, Arc<Notify>>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn set_readings(&self, city: &str, result: Result<Vec<ReadingRecord>, FetchError>) {
            self.readings.lock().unwrap().insert(city.to_string(), result);
        }

        fn set_alerts(&self, result: Result<Vec<AlertRecord>, FetchError>) {
            *self.alerts.lock().unwrap() = Some(result);
        }

        fn gate(&self, city: &str) -> Arc<Notify> {
            self.gates
                .lock()
                .unwrap()
                .entry(city.to_string())
                .or_default()
                .clone()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherSource for FakeSource {
        async fn fetch_readings(&self, city: &str) -> Result<Vec<ReadingRecord>, FetchError> {
            self.calls.lock().unwrap().push(city.to_string());
            let gate = self.gates.lock().unwrap().get(city).cloned();
            if let Some(gate) = gate {
                gate.notified().await;
            }
            self.readings
                .lock()
                .unwrap()
                .get(city)
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
            self.alerts.lock().unwrap().clone().unwrap_or_else(|| Ok(Vec::new()))
        }

        fn description(&self) -> &str {
            "fake"
        }
    }

    fn reading(city: &str, secs_before_now: i64, temp: f64) -> ReadingRecord {
        ReadingRecord::builder(city, Timestamp::from_secs(NOW - secs_before_now))
            .temperature(temp)
            .build()
    }

    fn controller(source: Arc<FakeSource>) -> DashboardController {
        let options = DashboardOptions {
            cities: vec!["A".into(), "B".into(), "C".into()],
            readings_interval: Duration::from_secs(300),
            alerts_interval: Duration::from_secs(60),
            ..Default::default()
        };
        DashboardController::new(source, options)
            .unwrap()
            .with_clock(Arc::new(FixedClock(Timestamp::from_secs(NOW))))
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[test]
    fn test_rejects_bad_options() {
        let source: Arc<dyn WeatherSource> = Arc::new(FakeSource::default());

        let empty = DashboardOptions::default();
        assert!(DashboardController::new(source.clone(), empty).is_err());

        let unknown = DashboardOptions {
            cities: vec!["A".into()],
            initial_city: Some("Z".into()),
            ..Default::default()
        };
        assert!(DashboardController::new(source.clone(), unknown).is_err());

        let zero = DashboardOptions {
            cities: vec!["A".into()],
            readings_interval: Duration::ZERO,
            ..Default::default()
        };
        assert!(DashboardController::new(source, zero).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_loading_ready() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Ok(vec![reading("A", 3600, 20.0), reading("A", 60, 22.0)]));
        let mut dash = controller(source.clone());

        assert_eq!(dash.state(), DashboardState::Idle);
        assert!(!dash.view().loading);

        dash.start();
        assert_eq!(dash.state(), DashboardState::Loading);
        assert!(dash.view().loading);

        settle().await;
        assert!(dash.refresh());

        let view = dash.view();
        assert_eq!(view.state, DashboardState::Ready);
        assert!(!view.loading);
        assert_eq!(view.selected_city, "A");
        assert_eq!(view.latest_reading.as_ref().and_then(|r| r.temperature), Some(22.0));
        assert_eq!(view.summary.avg_temp, Stat::Value(21.0));
        assert_eq!(view.chart_series.len(), 2);
        assert_eq!(view.last_updated, Some(Timestamp::from_secs(NOW)));
        assert_eq!(source.calls(), vec!["A"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_city_never_reaches_view() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Ok(vec![reading("A", 60, 10.0)]));
        source.set_readings("B", Ok(vec![reading("B", 60, 30.0)]));
        let gate_a = source.gate("A");

        let mut dash = controller(source.clone());
        dash.start();
        settle().await;
        // fetch(A) is in flight behind its gate.
        dash.refresh();
        assert_eq!(dash.state(), DashboardState::Loading);

        assert!(dash.select_city("B"));
        settle().await;
        dash.refresh();

        // A's fetch resolves after B's.
        gate_a.notify_one();
        settle().await;
        dash.refresh();

        let view = dash.view();
        assert_eq!(view.selected_city, "B");
        assert_eq!(view.state, DashboardState::Ready);
        let temps: Vec<f64> = view.chart_series.iter().map(|p| p.temperature).collect();
        assert_eq!(temps, vec![30.0]);
        assert_eq!(source.calls(), vec!["A", "B"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_update_is_discarded() {
        let source = Arc::new(FakeSource::default());
        let mut dash = controller(source);
        dash.start();
        dash.select_city("B");

        let stale = PollUpdate {
            key: "A".to_string(),
            generation: 1,
            status: PollStatus::Success(vec![reading("A", 60, 99.0)]),
        };
        assert!(!dash.apply_readings(stale));
        assert!(dash.readings.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_keeps_last_good_view() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Ok(vec![reading("A", 3600, 18.0), reading("A", 60, 20.0)]));
        let mut dash = controller(source.clone());

        dash.start();
        settle().await;
        dash.refresh();
        let good = dash.view();
        assert_eq!(good.state, DashboardState::Ready);

        source.set_readings("A", Err(FetchError::Network("refused".into())));
        tokio::time::sleep(Duration::from_secs(300)).await;
        dash.refresh();

        let view = dash.view();
        assert_eq!(view.state, DashboardState::Error);
        assert_eq!(view.error_state, Some(FetchErrorKind::Network));
        assert_eq!(view.summary, good.summary);
        assert_eq!(view.chart_series, good.chart_series);
        assert!(view.is_stale());

        // Retry succeeds on the next interval.
        source.set_readings("A", Ok(vec![reading("A", 30, 25.0)]));
        tokio::time::sleep(Duration::from_secs(300)).await;
        dash.refresh();

        let view = dash.view();
        assert_eq!(view.state, DashboardState::Ready);
        assert_eq!(view.error_state, None);
        assert_eq!(view.summary.max_temp, Stat::Value(25.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_then_retry_passes_through_loading() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Err(FetchError::Timeout));
        let gate = source.gate("A");
        let mut dash = controller(source.clone());

        dash.start();
        gate.notify_one();
        settle().await;
        dash.refresh();
        assert_eq!(dash.state(), DashboardState::Error);

        // Next poll is gated: Loading arrives, result does not.
        tokio::time::sleep(Duration::from_secs(300)).await;
        dash.refresh();
        assert_eq!(dash.state(), DashboardState::Loading);
        assert_eq!(dash.view().error_state, Some(FetchErrorKind::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_change_does_not_fetch() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Ok(vec![reading("A", 30 * 86_400, 10.0), reading("A", 3600, 20.0)]));
        let mut dash = controller(source.clone());

        dash.start();
        settle().await;
        dash.refresh();
        assert_eq!(dash.view().chart_series.len(), 1);

        dash.select_window(TimeWindow::Last30Days);
        let view = dash.view();
        assert_eq!(view.window, TimeWindow::Last30Days);
        assert_eq!(view.chart_series.len(), 2);
        // Summary covers every held reading regardless of window.
        assert_eq!(view.summary.avg_temp, Stat::Value(15.0));

        settle().await;
        assert!(!dash.refresh());
        assert_eq!(source.calls(), vec!["A"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_city_switch_resets_to_loading() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Ok(vec![reading("A", 60, 10.0)]));
        source.gate("B");
        let mut dash = controller(source.clone());

        dash.start();
        settle().await;
        dash.refresh();
        assert_eq!(dash.state(), DashboardState::Ready);

        assert!(dash.select_city("b"));
        let view = dash.view();
        assert_eq!(view.selected_city, "B");
        assert_eq!(view.state, DashboardState::Loading);
        assert!(view.latest_reading.is_none());
        assert!(view.chart_series.is_empty());
        assert_eq!(view.summary.avg_temp, Stat::Unavailable);

        assert!(!dash.select_city("Nowhere"));
        assert_eq!(dash.selected_city(), "B");
    }

    #[tokio::test(start_paused = true)]
    async fn test_alert_failure_keeps_alerts_and_state() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Ok(vec![reading("A", 60, 10.0)]));
        source.set_alerts(Ok(vec![AlertRecord::new(1, "A", "hot", Timestamp::from_secs(NOW))]));
        let mut dash = controller(source.clone());

        dash.start();
        settle().await;
        dash.refresh();
        assert_eq!(dash.view().alerts.len(), 1);

        source.set_alerts(Err(FetchError::Decode("eof".into())));
        tokio::time::sleep(Duration::from_secs(60)).await;
        dash.refresh();

        let view = dash.view();
        assert_eq!(view.state, DashboardState::Ready);
        assert_eq!(view.alerts.len(), 1);
        assert_eq!(view.alerts_error, Some(FetchErrorKind::Decode));
        assert_eq!(view.error_state, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_polling() {
        let source = Arc::new(FakeSource::default());
        let mut dash = controller(source.clone());

        dash.start();
        settle().await;
        dash.stop();
        tokio::time::sleep(Duration::from_secs(3_600)).await;

        assert_eq!(source.calls(), vec!["A"]);
        assert!(!dash.refresh());
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_update_waits_for_data() {
        let source = Arc::new(FakeSource::default());
        source.set_readings("A", Ok(vec![reading("A", 60, 10.0)]));
        let mut dash = controller(source);

        assert!(!dash.next_update().await);
        dash.start();
        while dash.state() != DashboardState::Ready {
            assert!(dash.next_update().await);
        }
        assert_eq!(dash.view().summary.avg_temp, Stat::Value(10.0));
    }

    /// Panics inside the polling task on the first readings fetch.
    #[derive(Debug)]
    struct PanickingSource;

    #[async_trait]
    impl WeatherSource for PanickingSource {
        async fn fetch_readings(&self, _city: &str) -> Result<Vec<ReadingRecord>, FetchError> {
            panic!("fetch blew up");
        }

        async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
            Ok(Vec::new())
        }

        fn description(&self) -> &str {
            "panicking"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_update_stops_when_readings_task_dies() {
        let options = DashboardOptions {
            cities: vec!["A".into()],
            ..Default::default()
        };
        let mut dash = DashboardController::new(Arc::new(PanickingSource), options).unwrap();
        dash.start();

        // Loading, then alerts, then the closed readings channel.
        let mut updates = 0;
        while dash.next_update().await {
            updates += 1;
            assert!(updates < 10, "next_update kept returning true");
        }

        // Stays false instead of spinning on the closed channel.
        assert!(!dash.next_update().await);
        assert_eq!(dash.state(), DashboardState::Loading);
    }
}
