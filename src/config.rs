//! Layered settings: defaults, optional TOML file, `SKYWATCH_*` environment.
//!
//! Command-line flags are applied last by the binary via [`Overrides`].
//!
//! ```toml
//! endpoint = "http://localhost:5001"
//! cities = ["Delhi", "Mumbai"]
//! readings_interval = "5m"   # or plain seconds: 300
//! alerts_interval = 60
//! request_timeout = "10s"
//! default_window = "24h"
//! ```
//!
//! Environment equivalents: `SKYWATCH_ENDPOINT`, `SKYWATCH_CITIES`
//! (comma-separated), `SKYWATCH_READINGS_INTERVAL`, `SKYWATCH_ALERTS_INTERVAL`,
//! `SKYWATCH_REQUEST_TIMEOUT`, `SKYWATCH_DEFAULT_WINDOW`.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Deserializer};

use crate::dashboard::DashboardOptions;
use crate::data::format::parse_interval;
use crate::data::TimeWindow;

const ENV_PREFIX: &str = "SKYWATCH";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Weather backend base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Cities offered for selection, in tab order.
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,

    #[serde(default = "default_readings_interval", deserialize_with = "interval")]
    pub readings_interval: Duration,

    #[serde(default = "default_alerts_interval", deserialize_with = "interval")]
    pub alerts_interval: Duration,

    /// Per-request timeout enforced by the HTTP client.
    #[serde(default = "default_request_timeout", deserialize_with = "interval")]
    pub request_timeout: Duration,

    #[serde(default, deserialize_with = "window")]
    pub default_window: TimeWindow,
}

fn default_endpoint() -> String {
    "http://localhost:5001".to_string()
}

fn default_cities() -> Vec<String> {
    ["Delhi", "Mumbai", "Chennai", "Bangalore", "Kolkata", "Hyderabad"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_readings_interval() -> Duration {
    Duration::from_secs(300)
}

fn default_alerts_interval() -> Duration {
    Duration::from_secs(60)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

/// Accept either whole seconds or an interval string such as "5m".
fn interval<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Secs(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Secs(secs) => Ok(Duration::from_secs(secs)),
        Raw::Text(text) => parse_interval(&text).map_err(serde::de::Error::custom),
    }
}

/// Accept a window name ("5d") or a bare day/hour count (5, 24).
///
/// The environment layer parses "5" into an integer before it gets here.
fn window<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeWindow, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Count(u64),
        Text(String),
    }

    let text = match Raw::deserialize(deserializer)? {
        Raw::Count(n) => n.to_string(),
        Raw::Text(text) => text,
    };
    text.parse().map_err(serde::de::Error::custom)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            cities: default_cities(),
            readings_interval: default_readings_interval(),
            alerts_interval: default_alerts_interval(),
            request_timeout: default_request_timeout(),
            default_window: TimeWindow::default(),
        }
    }
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub window: Option<TimeWindow>,
    pub readings_interval: Option<Duration>,
    pub alerts_interval: Option<Duration>,
}

impl Settings {
    /// Load settings from the optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map instead of the process environment.
    fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cities")
                .source(env),
        );

        let settings: Settings = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(&mut self, overrides: Overrides) -> Result<()> {
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(window) = overrides.window {
            self.default_window = window;
        }
        if let Some(interval) = overrides.readings_interval {
            self.readings_interval = interval;
        }
        if let Some(interval) = overrides.alerts_interval {
            self.alerts_interval = interval;
        }
        self.validate()
    }

    /// Reject settings the dashboard cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            bail!("endpoint must not be empty");
        }
        if self.cities.is_empty() {
            bail!("at least one city must be configured");
        }
        for (i, city) in self.cities.iter().enumerate() {
            if city.trim().is_empty() {
                bail!("city names must not be empty");
            }
            if self.cities[..i].iter().any(|c| c.eq_ignore_ascii_case(city)) {
                bail!("duplicate city: {}", city);
            }
        }
        if self.readings_interval.is_zero() {
            bail!("readings_interval must be greater than zero");
        }
        if self.alerts_interval.is_zero() {
            bail!("alerts_interval must be greater than zero");
        }
        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }
        Ok(())
    }

    /// Controller options for these settings, starting on `initial_city`.
    pub fn dashboard_options(&self, initial_city: Option<String>) -> DashboardOptions {
        DashboardOptions {
            cities: self.cities.iter().map(|c| c.trim().to_string()).collect(),
            initial_city,
            window: self.default_window,
            readings_interval: self.readings_interval,
            alerts_interval: self.alerts_interval,
        }
    }
}
