use chrono::{Days, Months, NaiveDateTime, Offset, TimeDelta};

use crate::calendar::CalendarContext;
use crate::instant::{Instant, OutOfRange};

const MONTHS_PER_YEAR: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl CalendarContext {
    /// Add a signed number of calendar units to `instant`.
    ///
    /// Years, months and days are added to the wall-clock date in this context's
    /// time zone, so the time of day is kept across DST changes. When the target
    /// month is shorter than the starting day, the day is clamped to the last day
    /// of that month: January 31 plus one month is February 28 (or 29).
    ///
    /// If the shifted wall-clock time occurs twice, the occurrence with the same
    /// UTC offset as `instant` is chosen. Hours and minutes are added as
    /// elapsed time.
    pub fn add(&self, instant: Instant, amount: i64, unit: Unit) -> Result<Instant, OutOfRange> {
        if amount == 0 {
            return Ok(instant);
        }
        let result = match unit {
            Unit::Year => amount
                .checked_mul(MONTHS_PER_YEAR)
                .ok_or(OutOfRange)
                .and_then(|months| self.add_calendar_months(instant, months)),
            Unit::Month => self.add_calendar_months(instant, amount),
            Unit::Day => self.add_calendar_days(instant, amount),
            Unit::Hour => add_elapsed(instant, TimeDelta::try_hours(amount)),
            Unit::Minute => add_elapsed(instant, TimeDelta::try_minutes(amount)),
        };
        if result.is_err() {
            log::debug!("adding {} {:?} to {} is out of range", amount, unit, instant);
        }
        result
    }

    pub fn add_years(&self, instant: Instant, years: i64) -> Result<Instant, OutOfRange> {
        self.add(instant, years, Unit::Year)
    }

    pub fn add_months(&self, instant: Instant, months: i64) -> Result<Instant, OutOfRange> {
        self.add(instant, months, Unit::Month)
    }

    pub fn add_days(&self, instant: Instant, days: i64) -> Result<Instant, OutOfRange> {
        self.add(instant, days, Unit::Day)
    }

    pub fn add_hours(&self, instant: Instant, hours: i64) -> Result<Instant, OutOfRange> {
        self.add(instant, hours, Unit::Hour)
    }

    pub fn add_minutes(&self, instant: Instant, minutes: i64) -> Result<Instant, OutOfRange> {
        self.add(instant, minutes, Unit::Minute)
    }

    fn add_calendar_months(&self, instant: Instant, months: i64) -> Result<Instant, OutOfRange> {
        let local = self.local_naive(instant)?;
        let magnitude = Months::new(u32::try_from(months.unsigned_abs()).map_err(|_| OutOfRange)?);
        let shifted = if months < 0 {
            local.checked_sub_months(magnitude)
        } else {
            local.checked_add_months(magnitude)
        };
        self.resolve_shifted(instant, shifted)
    }

    fn add_calendar_days(&self, instant: Instant, days: i64) -> Result<Instant, OutOfRange> {
        let local = self.local_naive(instant)?;
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days < 0 {
            local.checked_sub_days(magnitude)
        } else {
            local.checked_add_days(magnitude)
        };
        self.resolve_shifted(instant, shifted)
    }

    fn resolve_shifted(
        &self,
        source: Instant,
        shifted: Option<NaiveDateTime>,
    ) -> Result<Instant, OutOfRange> {
        let source_offset = self.local(source).offset().fix();
        self.resolve_preferring(shifted.ok_or(OutOfRange)?, Some(source_offset))
    }
}

fn add_elapsed(instant: Instant, delta: Option<TimeDelta>) -> Result<Instant, OutOfRange> {
    let delta = delta.ok_or(OutOfRange)?;
    instant
        .as_utc()
        .checked_add_signed(delta)
        .map(Instant::from)
        .ok_or(OutOfRange)
}
