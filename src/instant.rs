use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

/// A point in time. Instants carry no calendar fields of their own; year, month
/// and so on are derived through a [`CalendarContext`](crate::CalendarContext).
///
/// Equality and ordering are by absolute time, so two instants created in
/// different time zones compare equal when they denote the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("instant is out of range")]
pub struct OutOfRange;

impl Instant {
    pub fn min_value() -> Self {
        Instant(DateTime::<Utc>::MIN_UTC)
    }

    pub fn max_value() -> Self {
        Instant(DateTime::<Utc>::MAX_UTC)
    }

    pub fn epoch() -> Self {
        Instant(DateTime::<Utc>::default())
    }

    pub fn now() -> Self {
        Instant(Utc::now())
    }

    /// Create an instant from seconds and nanoseconds since the Unix epoch.
    /// `nanoseconds` must be below one second.
    pub fn from_timestamp(seconds: i64, nanoseconds: u32) -> Result<Self, OutOfRange> {
        DateTime::<Utc>::from_timestamp(seconds, nanoseconds)
            .map(Instant)
            .ok_or(OutOfRange)
    }

    pub fn from_timestamp_millis(milliseconds: i64) -> Result<Self, OutOfRange> {
        DateTime::<Utc>::from_timestamp_millis(milliseconds)
            .map(Instant)
            .ok_or(OutOfRange)
    }

    /// Whole seconds since the Unix epoch, rounded towards negative infinity.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    pub fn timestamp_subsec_nanos(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    pub(crate) fn as_utc(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<SystemTime> for Instant {
    fn from(value: SystemTime) -> Self {
        Instant(value.into())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(value: DateTime<Tz>) -> Self {
        Instant(value.with_timezone(&Utc))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}
