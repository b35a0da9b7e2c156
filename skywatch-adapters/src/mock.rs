//! Deterministic in-memory weather source.
//!
//! Generates hourly readings for the trailing 30 days of every known city.
//! Values follow a diurnal curve around a per-city baseline with a small
//! hash-derived jitter, so the same city and hour always produce the same
//! reading. Every 97th sample carries an unparseable humidity, which keeps
//! the absent-value paths exercised in demo mode.
//!
//! Alerts are derived from the generated readings: a city whose two most
//! recent temperatures both exceed 35 °C raises one alert.

use std::f64::consts::PI;

use async_trait::async_trait;

use skywatch_types::{AlertRecord, ReadingRecord, Timestamp, WeatherCondition};

use crate::{FetchError, WeatherSource};

const HOUR_MS: i64 = 3_600_000;
const HISTORY_HOURS: i64 = 30 * 24;
const ALERT_THRESHOLD: f64 = 35.0;
const ALERT_MESSAGE: &str = "Temperature exceeded 35°C for two consecutive updates";

/// Synthetic weather source for demos and tests.
#[derive(Debug, Clone)]
pub struct MockWeatherSource {
    cities: Vec<String>,
    anchor: Option<Timestamp>,
}

impl MockWeatherSource {
    /// Create a source that knows `cities` and tracks the wall clock.
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cities: cities.into_iter().map(Into::into).collect(),
            anchor: None,
        }
    }

    /// Pin "now" to a fixed instant so output is fully reproducible.
    pub fn anchored_at(mut self, now: Timestamp) -> Self {
        self.anchor = Some(now);
        self
    }

    fn now(&self) -> Timestamp {
        self.anchor.unwrap_or_else(Timestamp::now)
    }

    /// Generate the reading history for `city` ending at the hour containing `now`.
    pub fn readings_at(&self, city: &str, now: Timestamp) -> Vec<ReadingRecord> {
        let last_hour = now.as_millis().div_euclid(HOUR_MS);
        let seed = city_seed(city);

        (last_hour - HISTORY_HOURS + 1..=last_hour)
            .map(|hour| synth_reading(city, seed, hour))
            .collect()
    }

    /// Derive the alert feed at `now` for every known city.
    pub fn alerts_at(&self, now: Timestamp) -> Vec<AlertRecord> {
        let mut alerts = Vec::new();
        for (index, city) in self.cities.iter().enumerate() {
            let readings = self.readings_at(city, now);
            let hot = readings
                .iter()
                .rev()
                .take(2)
                .filter(|r| r.temperature.is_some_and(|t| t > ALERT_THRESHOLD))
                .count();
            if hot == 2 {
                if let Some(latest) = readings.last() {
                    // Stable across polls for the same city and hour.
                    let id = latest.timestamp.as_millis() / HOUR_MS * 1000 + index as i64;
                    alerts.push(AlertRecord::new(id, city.clone(), ALERT_MESSAGE, latest.timestamp));
                }
            }
        }
        alerts
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn fetch_readings(&self, city: &str) -> Result<Vec<ReadingRecord>, FetchError> {
        if !self.cities.iter().any(|c| c == city) {
            return Err(FetchError::Network(format!("unknown city '{}'", city)));
        }
        Ok(self.readings_at(city, self.now()))
    }

    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
        Ok(self.alerts_at(self.now()))
    }

    fn description(&self) -> &str {
        "demo data"
    }
}

// FNV-1a over the city name.
fn city_seed(city: &str) -> u64 {
    city.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Pseudo-random value in `[0, 1)` for a seed and hour.
fn jitter(seed: u64, hour: i64) -> f64 {
    let mut x = seed ^ (hour as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    (x >> 11) as f64 / (1u64 << 53) as f64
}

fn synth_reading(city: &str, seed: u64, hour: i64) -> ReadingRecord {
    let baseline = 24.0 + (seed % 9) as f64;
    let hour_of_day = hour.rem_euclid(24) as f64;
    // Peaks mid-afternoon UTC.
    let diurnal = 6.0 * (2.0 * PI * (hour_of_day - 9.0) / 24.0).sin();
    let noise = jitter(seed, hour);

    let temperature = baseline + diurnal + (noise - 0.5) * 2.0;
    let humidity = 45.0 + 35.0 * jitter(seed.rotate_left(17), hour);
    let wind_speed = 1.0 + 6.0 * jitter(seed.rotate_left(31), hour);
    let feels_like = temperature + (humidity - 50.0) / 10.0;

    let condition = match (noise * 10.0) as u32 {
        0..=4 => WeatherCondition::Clear,
        5..=7 => WeatherCondition::Cloudy,
        8 => WeatherCondition::Rain,
        _ => WeatherCondition::Unknown,
    };

    let builder = ReadingRecord::builder(city, Timestamp::from_millis(hour * HOUR_MS))
        .temperature(round1(temperature))
        .feels_like(round1(feels_like))
        .wind_speed(round1(wind_speed))
        .condition(condition);

    if hour.rem_euclid(97) == 0 {
        builder.raw_humidity("--").build()
    } else {
        builder.humidity(humidity.round()).build()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
