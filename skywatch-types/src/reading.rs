//! Weather readings - one observation for a city at an instant.

use alloc::string::String;

use crate::{finite, parse_measurement, Timestamp};

/// Coarse weather condition categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    #[default]
    Unknown,
}

impl WeatherCondition {
    /// Map a backend condition label (e.g. OpenWeatherMap's `main`) to a category.
    ///
    /// Matching is case-insensitive; anything unrecognised is `Unknown`.
    pub fn from_main(main: &str) -> Self {
        let main = main.trim();
        let is = |label: &str| main.eq_ignore_ascii_case(label);

        if is("clear") {
            Self::Clear
        } else if is("clouds") || is("cloudy") {
            Self::Cloudy
        } else if is("rain") || is("drizzle") {
            Self::Rain
        } else if is("snow") {
            Self::Snow
        } else {
            Self::Unknown
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Unknown => "Unknown",
        }
    }
}

/// The numeric measurements carried by a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
}

impl Metric {
    /// All metrics, in display order.
    pub const ALL: [Metric; 4] = [
        Metric::Temperature,
        Metric::FeelsLike,
        Metric::Humidity,
        Metric::WindSpeed,
    ];
}

/// One weather observation.
///
/// Numeric fields are `None` when the backend value failed coercion. They are
/// never NaN or infinite.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadingRecord {
    /// City the reading belongs to.
    pub city: String,

    /// When the observation was taken.
    pub timestamp: Timestamp,

    /// Air temperature in °C.
    pub temperature: Option<f64>,

    /// Apparent temperature in °C.
    pub feels_like: Option<f64>,

    /// Relative humidity in percent.
    pub humidity: Option<f64>,

    /// Wind speed in m/s.
    pub wind_speed: Option<f64>,

    /// Coarse condition category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: WeatherCondition,
}

impl ReadingRecord {
    /// Create a builder for a reading of `city` at `timestamp`.
    pub fn builder(city: impl Into<String>, timestamp: Timestamp) -> ReadingBuilder {
        ReadingBuilder::new(city, timestamp)
    }

    /// Get the value of a metric, if it was coerced successfully.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::FeelsLike => self.feels_like,
            Metric::Humidity => self.humidity,
            Metric::WindSpeed => self.wind_speed,
        }
    }
}

/// Builder for constructing `ReadingRecord` instances.
///
/// Numeric setters drop non-finite values; `raw_*` setters run textual
/// coercion first.
#[derive(Debug)]
pub struct ReadingBuilder {
    record: ReadingRecord,
}

impl ReadingBuilder {
    /// Create a new builder.
    pub fn new(city: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            record: ReadingRecord {
                city: city.into(),
                timestamp,
                ..Default::default()
            },
        }
    }

    /// Set a metric from an already-numeric value.
    pub fn metric(mut self, metric: Metric, value: Option<f64>) -> Self {
        let value = value.and_then(finite);
        match metric {
            Metric::Temperature => self.record.temperature = value,
            Metric::FeelsLike => self.record.feels_like = value,
            Metric::Humidity => self.record.humidity = value,
            Metric::WindSpeed => self.record.wind_speed = value,
        }
        self
    }

    pub fn temperature(self, value: f64) -> Self {
        self.metric(Metric::Temperature, Some(value))
    }

    pub fn feels_like(self, value: f64) -> Self {
        self.metric(Metric::FeelsLike, Some(value))
    }

    pub fn humidity(self, value: f64) -> Self {
        self.metric(Metric::Humidity, Some(value))
    }

    pub fn wind_speed(self, value: f64) -> Self {
        self.metric(Metric::WindSpeed, Some(value))
    }

    /// Set the temperature from text, absent if it does not parse.
    pub fn raw_temperature(self, text: &str) -> Self {
        self.metric(Metric::Temperature, parse_measurement(text))
    }

    pub fn raw_feels_like(self, text: &str) -> Self {
        self.metric(Metric::FeelsLike, parse_measurement(text))
    }

    pub fn raw_humidity(self, text: &str) -> Self {
        self.metric(Metric::Humidity, parse_measurement(text))
    }

    pub fn raw_wind_speed(self, text: &str) -> Self {
        self.metric(Metric::WindSpeed, parse_measurement(text))
    }

    /// Set the condition category.
    pub fn condition(mut self, condition: WeatherCondition) -> Self {
        self.record.condition = condition;
        self
    }

    /// Build the reading.
    pub fn build(self) -> ReadingRecord {
        self.record
    }
}
