//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is strictly before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is strictly after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp offset by the given number of minutes.
    ///
    /// Negative values move backwards.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + Duration::minutes(minutes))
    }

    /// Creates a timestamp from Unix seconds.
    pub fn from_unix_secs(secs: i64) -> Self {
        use chrono::TimeZone;
        Self(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Formats as RFC 3339 for API responses.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_before_and_after_are_strict() {
        let a = Timestamp::from_unix_secs(1_000);
        let b = Timestamp::from_unix_secs(2_000);

        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(!a.is_before(&a));
        assert!(!a.is_after(&a));
    }

    #[test]
    fn add_minutes_moves_forward() {
        let a = Timestamp::from_unix_secs(0);
        assert_eq!(a.add_minutes(30).as_unix_secs(), 1_800);
    }

    #[test]
    fn add_minutes_accepts_negative_offsets() {
        let a = Timestamp::from_unix_secs(3_600);
        assert_eq!(a.add_minutes(-60).as_unix_secs(), 0);
    }

    #[test]
    fn unix_secs_round_trip() {
        let ts = Timestamp::from_unix_secs(1_700_000_000);
        assert_eq!(ts.as_unix_secs(), 1_700_000_000);
    }

    #[test]
    fn ordering_follows_time() {
        let a = Timestamp::from_unix_secs(1);
        let b = Timestamp::from_unix_secs(2);
        assert!(a < b);
    }
}
