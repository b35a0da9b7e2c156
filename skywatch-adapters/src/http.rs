//! HTTP adapter for the weather backend's REST API.
//!
//! The backend exposes two endpoints:
//!
//! - `GET /api/weather?city=<name>` - reading history for one city
//! - `GET /api/alerts` - the global alert feed
//!
//! Both return JSON arrays. Rows are decoded leniently: every numeric field is
//! coerced on its own (numbers and numeric strings are accepted, anything else
//! becomes absent), and a row is only dropped when it has no usable instant.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use skywatch_adapters::http::HttpWeatherSource;
//! use skywatch_adapters::WeatherSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpWeatherSource::builder()
//!         .endpoint("http://localhost:5001")
//!         .timeout(Duration::from_secs(5))
//!         .build()?;
//!
//!     for alert in source.fetch_alerts().await? {
//!         println!("{}: {}", alert.city, alert.message);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use skywatch_types::{
    finite, parse_measurement, AlertRecord, Metric, ReadingRecord, Timestamp, WeatherCondition,
};

use crate::{FetchError, WeatherSource};

const DEFAULT_ENDPOINT: &str = "http://localhost:5001";

/// Weather source backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpWeatherSource {
    client: Client,
    endpoint: String,
    description: String,
}

impl HttpWeatherSource {
    /// Create a new builder for configuring the source.
    pub fn builder() -> HttpWeatherSourceBuilder {
        HttpWeatherSourceBuilder::default()
    }

    /// The base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_rows(&self, url: &str, query: &[(&str, &str)]) -> Result<Vec<Value>, FetchError> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        rows_from_body(body)
    }
}

#[async_trait]
impl WeatherSource for HttpWeatherSource {
    async fn fetch_readings(&self, city: &str) -> Result<Vec<ReadingRecord>, FetchError> {
        let url = format!("{}/api/weather", self.endpoint);
        let rows = self.get_rows(&url, &[("city", city)]).await?;

        let total = rows.len();
        let readings: Vec<ReadingRecord> = rows
            .into_iter()
            .filter_map(|row| decode_reading(row, city))
            .collect();

        if readings.len() < total {
            tracing::warn!(
                city,
                dropped = total - readings.len(),
                "Dropped malformed weather rows"
            );
        }
        Ok(readings)
    }

    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>, FetchError> {
        let url = format!("{}/api/alerts", self.endpoint);
        let rows = self.get_rows(&url, &[]).await?;

        let total = rows.len();
        let alerts: Vec<AlertRecord> = rows.into_iter().filter_map(decode_alert).collect();

        if alerts.len() < total {
            tracing::warn!(dropped = total - alerts.len(), "Dropped malformed alert rows");
        }
        Ok(alerts)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for HttpWeatherSource.
#[derive(Debug, Default)]
pub struct HttpWeatherSourceBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl HttpWeatherSourceBuilder {
    /// Set the API base URL (e.g., "http://localhost:5001").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the source.
    pub fn build(self) -> Result<HttpWeatherSource, FetchError> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));
        let client = Client::builder().timeout(timeout).build()?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(HttpWeatherSource {
            client,
            description: format!("HTTP {}", endpoint),
            endpoint,
        })
    }
}

fn rows_from_body(body: Value) -> Result<Vec<Value>, FetchError> {
    match body {
        Value::Array(rows) => Ok(rows),
        other => Err(FetchError::Decode(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One row of `/api/weather`. Numeric fields stay untyped until coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeatherRow {
    city: Option<String>,
    main: Option<String>,
    temp: Value,
    feels_like: Value,
    humidity: Value,
    wind_speed: Value,
    dt: Value,
}

/// One row of `/api/alerts`.
#[derive(Debug, Deserialize)]
struct AlertRow {
    id: i64,
    city: String,
    message: String,
    timestamp: Value,
}

fn decode_reading(row: Value, requested_city: &str) -> Option<ReadingRecord> {
    let row: WeatherRow = serde_json::from_value(row).ok()?;
    let timestamp = parse_instant(&row.dt)?;

    let city = row
        .city
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| requested_city.to_string());
    let condition = row
        .main
        .as_deref()
        .map(WeatherCondition::from_main)
        .unwrap_or_default();

    Some(
        ReadingRecord::builder(city, timestamp)
            .metric(Metric::Temperature, coerce(&row.temp))
            .metric(Metric::FeelsLike, coerce(&row.feels_like))
            .metric(Metric::Humidity, coerce(&row.humidity))
            .metric(Metric::WindSpeed, coerce(&row.wind_speed))
            .condition(condition)
            .build(),
    )
}

fn decode_alert(row: Value) -> Option<AlertRecord> {
    let row: AlertRow = serde_json::from_value(row).ok()?;
    let timestamp = parse_instant(&row.timestamp)?;
    Some(AlertRecord::new(row.id, row.city, row.message, timestamp))
}

/// Coerce a JSON value to a finite measurement.
fn coerce(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().and_then(finite),
        Value::String(s) => parse_measurement(s),
        _ => None,
    }
}

/// Parse an instant in any of the encodings the backend is known to emit.
fn parse_instant(value: &Value) -> Option<Timestamp> {
    match value {
        Value::Number(n) => n.as_i64().map(Timestamp::from_secs),
        Value::String(s) => parse_instant_str(s.trim()),
        _ => None,
    }
}

fn parse_instant_str(s: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(Timestamp::from_millis(dt.timestamp_millis()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp::from_millis(dt.timestamp_millis()));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Timestamp::from_millis(naive.and_utc().timestamp_millis()));
    }
    s.parse::<i64>().ok().map(Timestamp::from_secs)
}
