//! Trailing time windows for the trend chart.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};
use skywatch_types::{ReadingRecord, Timestamp};

const HOUR: u64 = 3600;
const DAY: u64 = 24 * HOUR;

/// A trailing duration used to select chart readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "24h", alias = "24")]
    Last24Hours,
    #[serde(rename = "5d", alias = "5")]
    Last5Days,
    #[serde(rename = "15d", alias = "15")]
    Last15Days,
    #[serde(rename = "30d", alias = "30")]
    Last30Days,
}

impl TimeWindow {
    /// All windows, shortest first.
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::Last24Hours,
        TimeWindow::Last5Days,
        TimeWindow::Last15Days,
        TimeWindow::Last30Days,
    ];

    pub fn duration(&self) -> Duration {
        Duration::from_secs(match self {
            TimeWindow::Last24Hours => DAY,
            TimeWindow::Last5Days => 5 * DAY,
            TimeWindow::Last15Days => 15 * DAY,
            TimeWindow::Last30Days => 30 * DAY,
        })
    }

    /// Compact form used in config and on the command line.
    pub fn short(&self) -> &'static str {
        match self {
            TimeWindow::Last24Hours => "24h",
            TimeWindow::Last5Days => "5d",
            TimeWindow::Last15Days => "15d",
            TimeWindow::Last30Days => "30d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Last24Hours => "Last 24 Hours",
            TimeWindow::Last5Days => "Last 5 Days",
            TimeWindow::Last15Days => "Last 15 Days",
            TimeWindow::Last30Days => "Last 30 Days",
        }
    }

    /// Whether points in this window span more than one calendar day.
    pub fn is_multi_day(&self) -> bool {
        !matches!(self, TimeWindow::Last24Hours)
    }

    /// Next longer window, wrapping around.
    pub fn next(&self) -> TimeWindow {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Next shorter window, wrapping around.
    pub fn prev(&self) -> TimeWindow {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|w| w == self).unwrap_or(0)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

impl FromStr for TimeWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let window = match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "24" | "1d" => TimeWindow::Last24Hours,
            "5d" | "5" => TimeWindow::Last5Days,
            "15d" | "15" => TimeWindow::Last15Days,
            "30d" | "30" => TimeWindow::Last30Days,
            other => bail!("Unknown time window: {} (expected 24h, 5d, 15d or 30d)", other),
        };
        Ok(window)
    }
}

/// Select the readings inside `window` ending at `now`.
///
/// Keeps every record with `timestamp >= now - window`, in input order.
/// Out-of-order input is tolerated; nothing is re-sorted.
pub fn filter(readings: &[ReadingRecord], window: TimeWindow, now: Timestamp) -> Vec<ReadingRecord> {
    let cutoff = now.saturating_sub(window.duration());
    readings
        .iter()
        .filter(|r| r.timestamp >= cutoff)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::{summarize, Stat};

    fn at(secs_before_now: i64, temp: f64) -> ReadingRecord {
        ReadingRecord::builder("Delhi", Timestamp::from_secs(NOW - secs_before_now))
            .temperature(temp)
            .build()
    }

    const NOW: i64 = 1_700_000_000;

    fn now() -> Timestamp {
        Timestamp::from_secs(NOW)
    }

    #[test]
    fn test_durations() {
        assert_eq!(TimeWindow::Last24Hours.duration(), Duration::from_secs(86_400));
        assert_eq!(TimeWindow::Last5Days.duration(), Duration::from_secs(5 * 86_400));
        assert_eq!(TimeWindow::Last15Days.duration(), Duration::from_secs(15 * 86_400));
        assert_eq!(TimeWindow::Last30Days.duration(), Duration::from_secs(30 * 86_400));
    }

    #[test]
    fn test_thirty_days_out_one_hour_in() {
        let readings = vec![at(30 * 86_400, 10.0), at(3600, 20.0)];

        let filtered = filter(&readings, TimeWindow::Last24Hours, now());
        assert_eq!(filtered, vec![readings[1].clone()]);

        let summary = summarize(&filtered);
        assert_eq!(summary.avg_temp.to_string(), "20.00");
        assert_eq!(summary.max_temp, Stat::Value(20.0));
        assert_eq!(summary.min_temp, Stat::Value(20.0));
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let readings = vec![at(86_400, 1.0), at(86_401, 2.0)];
        let filtered = filter(&readings, TimeWindow::Last24Hours, now());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].temperature, Some(1.0));
    }

    #[test]
    fn test_idempotent() {
        let readings: Vec<_> = (0..100).map(|i| at(i * 3_000, i as f64)).collect();
        for window in TimeWindow::ALL {
            let once = filter(&readings, window, now());
            let twice = filter(&once, window, now());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_preserves_order_of_unsorted_input() {
        let readings = vec![
            at(100, 1.0),
            at(40 * 86_400, 2.0),
            at(5_000, 3.0),
            at(10, 4.0),
            at(90_000, 5.0),
            at(2_000, 6.0),
        ];
        let filtered = filter(&readings, TimeWindow::Last24Hours, now());
        let temps: Vec<_> = filtered.iter().filter_map(|r| r.temperature).collect();
        assert_eq!(temps, vec![1.0, 3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_nothing_in_window_is_empty() {
        let readings = vec![at(20 * 86_400, 1.0)];
        assert!(filter(&readings, TimeWindow::Last5Days, now()).is_empty());
        assert!(filter(&[], TimeWindow::Last30Days, now()).is_empty());
    }

    #[test]
    fn test_future_readings_are_kept() {
        let readings = vec![at(-600, 1.0)];
        assert_eq!(filter(&readings, TimeWindow::Last24Hours, now()).len(), 1);
    }

    #[test]
    fn test_parse_and_cycle() {
        assert_eq!("24h".parse::<TimeWindow>().unwrap(), TimeWindow::Last24Hours);
        assert_eq!("5".parse::<TimeWindow>().unwrap(), TimeWindow::Last5Days);
        assert_eq!(" 15D ".parse::<TimeWindow>().unwrap(), TimeWindow::Last15Days);
        assert!("7d".parse::<TimeWindow>().is_err());

        assert_eq!(TimeWindow::Last30Days.next(), TimeWindow::Last24Hours);
        assert_eq!(TimeWindow::Last24Hours.prev(), TimeWindow::Last30Days);
        assert_eq!(TimeWindow::Last5Days.next(), TimeWindow::Last15Days);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&TimeWindow::Last5Days).unwrap(), "\"5d\"");
        let w: TimeWindow = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(w, TimeWindow::Last30Days);
    }
}
