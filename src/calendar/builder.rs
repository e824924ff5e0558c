use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use thiserror::Error;

use crate::calendar::CalendarContext;
use crate::instant::{Instant, OutOfRange};
use crate::locale::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown time zone {0:?}")]
    UnknownTimeZone(String),
    #[error("unknown locale {0:?}")]
    UnknownLocale(String),
}

#[derive(Default)]
pub struct CalendarContextBuilder {
    time_zone: Option<Result<Tz, ConfigError>>,
    locale: Option<Result<Arc<Locale>, ConfigError>>,
}

impl CalendarContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_zone(&mut self, time_zone: Tz) -> &mut Self {
        self.time_zone = Some(Ok(time_zone));
        self
    }

    /// Set the time zone by IANA name, e.g. `"Europe/Berlin"`. An unknown name is
    /// reported by [`build`](Self::build).
    pub fn time_zone_name(&mut self, name: &str) -> &mut Self {
        self.time_zone = Some(
            name.parse::<Tz>()
                .map_err(|_| ConfigError::UnknownTimeZone(name.to_string())),
        );
        self
    }

    pub fn locale(&mut self, locale: impl Into<Arc<Locale>>) -> &mut Self {
        self.locale = Some(Ok(locale.into()));
        self
    }

    /// Set one of the built-in locales by identifier. An unknown identifier is
    /// reported by [`build`](Self::build).
    pub fn locale_identifier(&mut self, identifier: &str) -> &mut Self {
        self.locale = Some(
            Locale::named(identifier).ok_or_else(|| ConfigError::UnknownLocale(identifier.to_string())),
        );
        self
    }

    pub fn build(&self) -> Result<CalendarContext, ConfigError> {
        let time_zone = self.time_zone.clone().transpose()?.unwrap_or(Tz::UTC);
        let locale = match self.locale.clone().transpose()? {
            Some(locale) => locale,
            None => Arc::new(Locale::default()),
        };
        Ok(CalendarContext::new(time_zone, locale))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    #[error("no year provided")]
    MissingYear,
    #[error("invalid date or time")]
    InvalidDateTime,
    #[error("date is out of range")]
    OutOfRange,
}

impl From<OutOfRange> for BuildError {
    fn from(_: OutOfRange) -> Self {
        BuildError::OutOfRange
    }
}

/// Builds an [`Instant`] from wall-clock fields interpreted in a context's time zone.
///
/// Only the year is required; the other fields default to the start of their range.
pub struct InstantBuilder {
    context: CalendarContext,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    nanosecond: Option<u32>,
}

impl InstantBuilder {
    pub(super) fn new(context: CalendarContext) -> Self {
        InstantBuilder {
            context,
            year: None,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
            nanosecond: None,
        }
    }

    pub fn year(&mut self, year: i32) -> &mut Self {
        self.year = Some(year);
        self
    }

    pub fn month(&mut self, month: u32) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn day(&mut self, day: u32) -> &mut Self {
        self.day = Some(day);
        self
    }

    pub fn hour(&mut self, hour: u32) -> &mut Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(&mut self, minute: u32) -> &mut Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(&mut self, second: u32) -> &mut Self {
        self.second = Some(second);
        self
    }

    pub fn nanosecond(&mut self, nanosecond: u32) -> &mut Self {
        self.nanosecond = Some(nanosecond);
        self
    }

    pub fn build(&self) -> Result<Instant, BuildError> {
        let year = self.year.ok_or(BuildError::MissingYear)?;
        if year < NaiveDate::MIN.year() || year > NaiveDate::MAX.year() {
            return Err(BuildError::OutOfRange);
        }
        let date = NaiveDate::from_ymd_opt(year, self.month.unwrap_or(1), self.day.unwrap_or(1))
            .ok_or(BuildError::InvalidDateTime)?;
        let time = NaiveTime::from_hms_nano_opt(
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.nanosecond.unwrap_or(0),
        )
        .ok_or(BuildError::InvalidDateTime)?;
        Ok(self.context.resolve(date.and_time(time))?)
    }
}
