//! Numeric coercion for measurements arriving from a weather backend.
//!
//! Backends deliver numbers, numeric strings, nulls and occasionally garbage.
//! Every measurement is coerced independently into `Option<f64>`: a value
//! that cannot become a finite number is absent. Absent values are skipped by
//! statistics rather than reported.

/// Keep a value only if it is finite.
///
/// ```rust
/// use skywatch_types::finite;
///
/// assert_eq!(finite(20.5), Some(20.5));
/// assert_eq!(finite(f64::NAN), None);
/// assert_eq!(finite(f64::INFINITY), None);
/// ```
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Parse a textual measurement such as `"31.4"` or `" 7 "`.
///
/// Surrounding whitespace is ignored. Empty strings, non-numeric text and
/// textual infinities/NaN are absent.
///
/// ```rust
/// use skywatch_types::parse_measurement;
///
/// assert_eq!(parse_measurement("31.4"), Some(31.4));
/// assert_eq!(parse_measurement("bad"), None);
/// assert_eq!(parse_measurement("NaN"), None);
/// ```
pub fn parse_measurement(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().and_then(finite)
}
