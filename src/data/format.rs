//! Parsing and formatting of polling intervals and ages.

use std::time::Duration;

use anyhow::{bail, Result};

/// Suffix to milliseconds multiplier (longer suffixes first)
const UNITS: &[(&str, f64)] = &[
    ("ms", 1.0),
    ("s", 1_000.0),
    ("m", 60_000.0),
    ("h", 3_600_000.0),
];

/// Parse interval strings like "300s", "5m", "1.5h", "500ms".
///
/// A bare number is taken as seconds.
pub fn parse_interval(s: &str) -> Result<Duration> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            return to_duration(val_str, *multiplier, s);
        }
    }

    to_duration(s, 1_000.0, s)
}

fn to_duration(val_str: &str, multiplier: f64, original: &str) -> Result<Duration> {
    let val: f64 = match val_str.trim().parse() {
        Ok(v) => v,
        Err(_) => bail!("Unknown interval format: {}", original),
    };
    if !val.is_finite() || val < 0.0 {
        bail!("Interval must be a non-negative number: {}", original);
    }
    Ok(Duration::from_millis((val * multiplier).round() as u64))
}

/// Format an interval compactly for display ("5m", "60s", "750ms").
pub fn format_interval(d: Duration) -> String {
    let millis = d.as_millis();
    if millis < 1_000 {
        format!("{}ms", millis)
    } else if millis % 3_600_000 == 0 {
        format!("{}h", millis / 3_600_000)
    } else if millis % 60_000 == 0 {
        format!("{}m", millis / 60_000)
    } else if millis % 1_000 == 0 {
        format!("{}s", millis / 1_000)
    } else {
        format!("{:.1}s", d.as_secs_f64())
    }
}

/// Format how long ago something happened ("just now", "42s ago", "3m ago").
pub fn format_age(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 5 {
        "just now".to_string()
    } else if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_interval("300s").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_interval("60").unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn test_parse_minutes_and_hours() {
        assert_eq!(parse_interval("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_interval("1.5h").unwrap(), Duration::from_secs(5400));
    }

    #[test]
    fn test_parse_milliseconds() {
        assert_eq!(parse_interval(" 500ms ").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_interval("soon").is_err());
        assert!(parse_interval("-5s").is_err());
        assert!(parse_interval("").is_err());
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(Duration::from_secs(300)), "5m");
        assert_eq!(format_interval(Duration::from_secs(45)), "45s");
        assert_eq!(format_interval(Duration::from_secs(7200)), "2h");
        assert_eq!(format_interval(Duration::from_millis(250)), "250ms");
        assert_eq!(format_interval(Duration::from_millis(1500)), "1.5s");
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::from_secs(1)), "just now");
        assert_eq!(format_age(Duration::from_secs(42)), "42s ago");
        assert_eq!(format_age(Duration::from_secs(185)), "3m ago");
    }
}
