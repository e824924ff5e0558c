pub use arithmetic::Unit;
pub use builder::{BuildError, CalendarContextBuilder, ConfigError, InstantBuilder};
pub use format::InvalidFormat;

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::instant::{Instant, OutOfRange};
use crate::locale::Locale;

mod arithmetic;
mod builder;
mod fields;
mod format;

// How far back to look for the offset in effect before a DST gap.
const GAP_LOOKBEHIND_HOURS: i64 = 6;

/// The calendar configuration that instants are interpreted through: a time
/// zone for deriving wall-clock fields, and a locale for names and formatting.
///
/// Contexts are immutable and cheap to clone; clones share their state.
#[derive(Debug, Clone)]
pub struct CalendarContext {
    pimpl: Arc<SharedContext>,
}

#[derive(Debug)]
struct SharedContext {
    time_zone: Tz,
    locale: Arc<Locale>,
}

impl CalendarContext {
    pub fn new(time_zone: Tz, locale: impl Into<Arc<Locale>>) -> Self {
        CalendarContext {
            pimpl: Arc::new(SharedContext {
                time_zone,
                locale: locale.into(),
            }),
        }
    }

    pub fn builder() -> CalendarContextBuilder {
        CalendarContextBuilder::new()
    }

    /// Build a context from the process environment.
    ///
    /// The time zone comes from `TZ` and the locale from the first of `LC_ALL`,
    /// `LC_TIME` and `LANG` that is set. Anything missing or unrecognized falls
    /// back to UTC and `en_US`.
    pub fn from_env() -> Self {
        let time_zone = std::env::var("TZ").ok();
        let locale = ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()));
        Self::from_env_values(time_zone.as_deref(), locale.as_deref())
    }

    fn from_env_values(time_zone: Option<&str>, locale: Option<&str>) -> Self {
        let time_zone = match time_zone
            .map(|name| name.trim_start_matches(':'))
            .filter(|name| !name.is_empty())
        {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("unknown time zone {:?}, falling back to UTC", name);
                Tz::UTC
            }),
            None => Tz::UTC,
        };

        let locale = match locale.map(strip_locale_suffix) {
            Some("C") | Some("POSIX") | None => Arc::new(Locale::default()),
            Some(identifier) => Locale::named(identifier).unwrap_or_else(|| {
                log::warn!(
                    "unknown locale {:?}, falling back to {}",
                    identifier,
                    Locale::DEFAULT_IDENTIFIER
                );
                Arc::new(Locale::default())
            }),
        };

        CalendarContext::new(time_zone, locale)
    }

    pub fn time_zone(&self) -> Tz {
        self.pimpl.time_zone
    }

    pub fn locale(&self) -> &Locale {
        &self.pimpl.locale
    }

    /// Start building an instant from wall-clock fields in this context's time zone.
    pub fn instant_builder(&self) -> InstantBuilder {
        InstantBuilder::new(self.clone())
    }

    pub(crate) fn local(&self, instant: Instant) -> DateTime<Tz> {
        instant.as_utc().with_timezone(&self.pimpl.time_zone)
    }

    pub(crate) fn local_naive(&self, instant: Instant) -> Result<NaiveDateTime, OutOfRange> {
        let utc = instant.as_utc().naive_utc();
        let offset = self.pimpl.time_zone.offset_from_utc_datetime(&utc).fix();
        let offset = TimeDelta::try_seconds(offset.local_minus_utc() as i64).ok_or(OutOfRange)?;
        utc.checked_add_signed(offset).ok_or(OutOfRange)
    }

    /// Map a wall-clock time back to an instant.
    ///
    /// Ambiguous times resolve to the earlier instant. Times that fall into a gap
    /// are read with the offset in effect before the gap, which moves them
    /// forward by the gap's length.
    pub(crate) fn resolve(&self, local: NaiveDateTime) -> Result<Instant, OutOfRange> {
        self.resolve_preferring(local, None)
    }

    /// Like [`resolve`](Self::resolve), but an ambiguous time picks the
    /// occurrence whose UTC offset equals `preferred` when there is one.
    pub(crate) fn resolve_preferring(
        &self,
        local: NaiveDateTime,
        preferred: Option<FixedOffset>,
    ) -> Result<Instant, OutOfRange> {
        let time_zone = self.pimpl.time_zone;
        match time_zone.from_local_datetime(&local) {
            LocalResult::Single(date_time) => Ok(date_time.into()),
            LocalResult::Ambiguous(earliest, latest) => match preferred {
                Some(offset) if latest.offset().fix() == offset => Ok(latest.into()),
                _ => Ok(earliest.into()),
            },
            LocalResult::None => {
                let lookbehind = TimeDelta::try_hours(GAP_LOOKBEHIND_HOURS).ok_or(OutOfRange)?;
                let before = local.checked_sub_signed(lookbehind).ok_or(OutOfRange)?;
                let offset = time_zone
                    .from_local_datetime(&before)
                    .earliest()
                    .ok_or(OutOfRange)?
                    .offset()
                    .fix();
                let offset =
                    TimeDelta::try_seconds(offset.local_minus_utc() as i64).ok_or(OutOfRange)?;
                let utc = local.checked_sub_signed(offset).ok_or(OutOfRange)?;
                Ok(time_zone.from_utc_datetime(&utc).into())
            }
        }
    }
}

impl Default for CalendarContext {
    fn default() -> Self {
        CalendarContext::new(Tz::UTC, Locale::default())
    }
}

fn strip_locale_suffix(value: &str) -> &str {
    value.split(['.', '@']).next().unwrap_or(value)
}
