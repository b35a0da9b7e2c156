//! Instant representation for serialization.
//!
//! We use milliseconds since the Unix epoch as the canonical unit so that
//! readings serialize identically across formats and compare cheaply.

use core::time::Duration;

/// An instant in milliseconds since the Unix epoch (UTC).
///
/// Signed so that instants before 1970 and window arithmetic near the epoch
/// stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Create from milliseconds since the epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Create from seconds since the epoch.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Get the value in milliseconds since the epoch.
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Get the value in whole seconds since the epoch (floored).
    pub const fn as_secs(&self) -> i64 {
        self.0.div_euclid(1000)
    }

    /// The current wall-clock instant.
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => Self(i64::try_from(d.as_millis()).unwrap_or(i64::MAX)),
            Err(e) => Self(-i64::try_from(e.duration().as_millis()).unwrap_or(i64::MAX)),
        }
    }

    /// Instant `d` before this one, saturating at the representable minimum.
    pub fn saturating_sub(self, d: Duration) -> Self {
        let millis = i64::try_from(d.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_sub(millis))
    }

    /// Instant `d` after this one, saturating at the representable maximum.
    pub fn saturating_add(self, d: Duration) -> Self {
        let millis = i64::try_from(d.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(millis))
    }

    /// Time elapsed from `earlier` to `self`, or zero if `earlier` is later.
    pub fn duration_since(self, earlier: Timestamp) -> Duration {
        let delta = self.0.saturating_sub(earlier.0);
        Duration::from_millis(u64::try_from(delta).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let t = Timestamp::from_secs(1_700_000_000);
        assert_eq!(t.as_millis(), 1_700_000_000_000);
        assert_eq!(t.as_secs(), 1_700_000_000);
        assert_eq!(Timestamp::from_millis(-1).as_secs(), -1);
    }

    #[test]
    fn test_window_arithmetic() {
        let now = Timestamp::from_secs(100_000);
        let day = Duration::from_secs(86_400);
        assert_eq!(now.saturating_sub(day), Timestamp::from_secs(13_600));
        assert_eq!(now.saturating_sub(day).saturating_add(day), now);
        assert_eq!(now.duration_since(now.saturating_sub(day)), day);
        assert_eq!(now.saturating_sub(day).duration_since(now), Duration::ZERO);
    }

    #[test]
    fn test_saturation() {
        let t = Timestamp(i64::MIN + 5);
        assert_eq!(t.saturating_sub(Duration::from_secs(1)), Timestamp(i64::MIN));
    }

    #[test]
    fn test_ordering() {
        assert!(Timestamp::from_millis(1) > Timestamp::EPOCH);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Timestamp::from_millis(42)).unwrap();
        assert_eq!(json, "42");
    }
}
