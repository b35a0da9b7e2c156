//! Summary statistics over a sequence of readings.
//!
//! Each metric is reduced independently over the readings where it is
//! present, so one unparseable field never hides the rest of a record.

use std::fmt;

use serde::Serialize;
use skywatch_types::{Metric, ReadingRecord, WeatherCondition};

/// A summary statistic, or an explicit marker that no input was usable.
///
/// Serializes as a plain number or `null`; displays as `20.00` or `N/A`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Stat {
    Value(f64),
    #[default]
    Unavailable,
}

impl Stat {
    pub fn value(&self) -> Option<f64> {
        match self {
            Stat::Value(v) => Some(*v),
            Stat::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Stat::Value(_))
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Value(v) => write!(f, "{:.2}", v),
            Stat::Unavailable => f.write_str("N/A"),
        }
    }
}

/// Round to two decimal places, halves away from zero.
///
/// Operates on the binary value, so inputs like `1.005` (stored as
/// `1.00499...`) round down. Values too large to scale have no fractional
/// part and are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Aggregated statistics for a set of readings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AggregateSummary {
    pub avg_temp: Stat,
    pub max_temp: Stat,
    pub min_temp: Stat,
    pub avg_feels_like: Stat,
    pub max_feels_like: Stat,
    pub min_feels_like: Stat,
    pub avg_humidity: Stat,
    pub avg_wind_speed: Stat,
    /// Number of readings summarized, including ones with absent fields.
    pub sample_count: usize,
    /// Most frequent known condition; ties go to the one seen first.
    pub dominant_condition: Option<WeatherCondition>,
}

impl AggregateSummary {
    /// A summary with every statistic unavailable.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Running mean and extremes for one metric.
#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    mean: f64,
    min: f64,
    max: f64,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.count += 1;
        if self.count == 1 {
            self.mean = value;
            self.min = value;
            self.max = value;
            return;
        }
        // Incremental form stays finite where a running sum could overflow.
        self.mean += (value - self.mean) / self.count as f64;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn stat(&self, pick: impl Fn(&Self) -> f64) -> Stat {
        if self.count == 0 {
            Stat::Unavailable
        } else {
            Stat::Value(round2(pick(self)))
        }
    }

    fn avg(&self) -> Stat {
        // Float error can push the mean a hair past an extreme.
        self.stat(|a| a.mean.clamp(a.min, a.max))
    }

    fn max(&self) -> Stat {
        self.stat(|a| a.max)
    }

    fn min(&self) -> Stat {
        self.stat(|a| a.min)
    }
}

/// Reduce `readings` to an [`AggregateSummary`].
///
/// Pure: the result depends only on the input.
pub fn summarize(readings: &[ReadingRecord]) -> AggregateSummary {
    let mut acc: [Accumulator; 4] = Default::default();

    for reading in readings {
        for (slot, metric) in acc.iter_mut().zip(Metric::ALL) {
            if let Some(value) = reading.metric(metric) {
                slot.push(value);
            }
        }
    }

    let [temp, feels, humidity, wind] = &acc;

    AggregateSummary {
        avg_temp: temp.avg(),
        max_temp: temp.max(),
        min_temp: temp.min(),
        avg_feels_like: feels.avg(),
        max_feels_like: feels.max(),
        min_feels_like: feels.min(),
        avg_humidity: humidity.avg(),
        avg_wind_speed: wind.avg(),
        sample_count: readings.len(),
        dominant_condition: dominant_condition(readings),
    }
}

fn dominant_condition(readings: &[ReadingRecord]) -> Option<WeatherCondition> {
    // (condition, count) in order of first appearance
    let mut tally: Vec<(WeatherCondition, usize)> = Vec::new();

    for condition in readings.iter().map(|r| r.condition) {
        if condition == WeatherCondition::Unknown {
            continue;
        }
        match tally.iter_mut().find(|(c, _)| *c == condition) {
            Some((_, count)) => *count += 1,
            None => tally.push((condition, 1)),
        }
    }

    let mut best: Option<(WeatherCondition, usize)> = None;
    for (condition, count) in tally {
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((condition, count));
        }
    }
    best.map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_types::Timestamp;

    fn reading(temp: Option<f64>) -> ReadingRecord {
        ReadingRecord::builder("Delhi", Timestamp::EPOCH)
            .metric(Metric::Temperature, temp)
            .build()
    }

    fn full(temp: f64, feels: f64, humidity: f64, wind: f64) -> ReadingRecord {
        ReadingRecord::builder("Delhi", Timestamp::EPOCH)
            .temperature(temp)
            .feels_like(feels)
            .humidity(humidity)
            .wind_speed(wind)
            .build()
    }

    #[test]
    fn test_empty_is_unavailable() {
        let summary = summarize(&[]);
        assert_eq!(summary, AggregateSummary::unavailable());
        assert_eq!(summary.avg_temp, Stat::Unavailable);
        assert_eq!(summary.min_feels_like, Stat::Unavailable);
        assert_eq!(summary.avg_wind_speed.to_string(), "N/A");
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.dominant_condition, None);
    }

    #[test]
    fn test_invalid_field_is_excluded() {
        let bad = ReadingRecord::builder("Delhi", Timestamp::EPOCH)
            .raw_temperature("bad")
            .build();
        let summary = summarize(&[reading(Some(20.0)), bad]);

        assert_eq!(summary.avg_temp.to_string(), "20.00");
        assert_eq!(summary.max_temp, Stat::Value(20.0));
        assert_eq!(summary.min_temp, Stat::Value(20.0));
        assert_eq!(summary.sample_count, 2);
    }

    #[test]
    fn test_all_absent_field_is_unavailable() {
        let summary = summarize(&[reading(Some(12.0)), reading(None)]);
        assert_eq!(summary.avg_temp, Stat::Value(12.0));
        assert_eq!(summary.avg_humidity, Stat::Unavailable);
        assert_eq!(summary.max_feels_like, Stat::Unavailable);
    }

    #[test]
    fn test_mean_and_extremes() {
        let summary = summarize(&[
            full(10.0, 9.0, 40.0, 2.0),
            full(20.0, 21.5, 60.0, 4.0),
            full(31.0, 35.25, 80.0, 3.0),
        ]);

        assert_eq!(summary.avg_temp, Stat::Value(20.33));
        assert_eq!(summary.max_temp, Stat::Value(31.0));
        assert_eq!(summary.min_temp, Stat::Value(10.0));
        assert_eq!(summary.avg_feels_like, Stat::Value(21.92));
        assert_eq!(summary.max_feels_like, Stat::Value(35.25));
        assert_eq!(summary.min_feels_like, Stat::Value(9.0));
        assert_eq!(summary.avg_humidity, Stat::Value(60.0));
        assert_eq!(summary.avg_wind_speed, Stat::Value(3.0));
    }

    #[test]
    fn test_min_avg_max_ordering() {
        let samples: Vec<ReadingRecord> = (0..50)
            .map(|i| {
                let t = ((i * 37) % 23) as f64 * 1.37 - 7.1;
                full(t, t - 0.4, 50.0, 1.0)
            })
            .collect();

        for len in 1..samples.len() {
            let summary = summarize(&samples[..len]);
            for (min, avg, max) in [
                (summary.min_temp, summary.avg_temp, summary.max_temp),
                (summary.min_feels_like, summary.avg_feels_like, summary.max_feels_like),
            ] {
                let (min, avg, max) = (min.value().unwrap(), avg.value().unwrap(), max.value().unwrap());
                assert!(min <= avg && avg <= max, "{min} <= {avg} <= {max}");
            }
        }
    }

    #[test]
    fn test_identical_values_average_exactly() {
        let summary = summarize(&[reading(Some(0.1)), reading(Some(0.1)), reading(Some(0.1))]);
        assert_eq!(summary.avg_temp, Stat::Value(0.1));
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(20.0), 20.0);
    }

    #[test]
    fn test_huge_values_stay_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-f64::MAX), -f64::MAX);

        let summary = summarize(&[ReadingRecord::builder("Delhi", Timestamp::EPOCH)
            .temperature(1e307)
            .build()]);
        assert_eq!(summary.max_temp, Stat::Value(1e307));
        assert_eq!(summary.avg_temp, Stat::Value(1e307));
    }

    #[test]
    fn test_pure() {
        let input = [full(1.0, 2.0, 3.0, 4.0), reading(Some(7.0))];
        assert_eq!(summarize(&input), summarize(&input));
    }

    #[test]
    fn test_dominant_condition() {
        let with = |c| {
            ReadingRecord::builder("Delhi", Timestamp::EPOCH)
                .condition(c)
                .build()
        };

        let summary = summarize(&[
            with(WeatherCondition::Unknown),
            with(WeatherCondition::Unknown),
            with(WeatherCondition::Rain),
            with(WeatherCondition::Clear),
            with(WeatherCondition::Clear),
            with(WeatherCondition::Rain),
        ]);
        // Rain and Clear tie; Rain appeared first.
        assert_eq!(summary.dominant_condition, Some(WeatherCondition::Rain));

        let summary = summarize(&[with(WeatherCondition::Unknown)]);
        assert_eq!(summary.dominant_condition, None);
    }

    #[test]
    fn test_stat_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Stat::Value(20.5)).unwrap(), "20.5");
        assert_eq!(serde_json::to_string(&Stat::Unavailable).unwrap(), "null");
    }
}
