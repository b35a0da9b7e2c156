//! Alerts raised by the weather backend.

use alloc::string::String;

use crate::Timestamp;

/// A weather alert for a city.
///
/// Alerts are immutable once received; `id` is unique per alert.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertRecord {
    /// Backend-assigned identifier.
    pub id: i64,

    /// City the alert concerns.
    pub city: String,

    /// Human-readable alert text.
    pub message: String,

    /// When the alert was raised.
    pub timestamp: Timestamp,
}

impl AlertRecord {
    /// Create a new alert.
    pub fn new(
        id: i64,
        city: impl Into<String>,
        message: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            city: city.into(),
            message: message.into(),
            timestamp,
        }
    }
}
