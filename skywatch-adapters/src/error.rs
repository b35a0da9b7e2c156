//! Error types for data sources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when fetching readings or alerts.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Backend unreachable or returned a failure status.
    #[error("Network error: {0}")]
    Network(String),

    /// Payload could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// The category of this failure, without its detail message.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Decode(_) => FetchErrorKind::Decode,
            FetchError::Timeout => FetchErrorKind::Timeout,
        }
    }
}

/// Failure categories surfaced to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Network,
    Decode,
    Timeout,
}

impl FetchErrorKind {
    /// Short label for status lines.
    pub fn label(&self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network error",
            FetchErrorKind::Decode => "malformed response",
            FetchErrorKind::Timeout => "request timed out",
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(FetchError::Network("refused".into()).kind(), FetchErrorKind::Network);
        assert_eq!(FetchError::Decode("eof".into()).kind(), FetchErrorKind::Decode);
        assert_eq!(FetchError::Timeout.kind(), FetchErrorKind::Timeout);
    }

    #[test]
    fn test_display() {
        assert!(FetchError::Network("refused".into()).to_string().contains("refused"));
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }
}
