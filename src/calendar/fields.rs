use chrono::{Datelike, Timelike};

use crate::calendar::{CalendarContext, Unit};
use crate::instant::{Instant, OutOfRange};
use crate::weekday::Weekday;

impl CalendarContext {
    pub fn year(&self, instant: Instant) -> i32 {
        self.local(instant).year()
    }

    /// Month of the year, starting at 1.
    pub fn month(&self, instant: Instant) -> u32 {
        self.local(instant).month()
    }

    /// Day of the month, starting at 1.
    pub fn day(&self, instant: Instant) -> u32 {
        self.local(instant).day()
    }

    pub fn hour(&self, instant: Instant) -> u32 {
        self.local(instant).hour()
    }

    pub fn minute(&self, instant: Instant) -> u32 {
        self.local(instant).minute()
    }

    pub fn second(&self, instant: Instant) -> u32 {
        self.local(instant).second()
    }

    pub fn weekday(&self, instant: Instant) -> Weekday {
        self.local(instant).weekday().into()
    }

    /// The start of the first day of the month containing `instant`.
    pub fn first_day_of_current_month(&self, instant: Instant) -> Result<Instant, OutOfRange> {
        let local = self.local_naive(instant)?;
        let start = local
            .date()
            .with_day(1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or(OutOfRange)?;
        self.resolve(start)
    }

    /// True only if `instant` is exactly the start of its month. Any other time
    /// on the first day, even a nanosecond past midnight, does not count.
    pub fn is_first_day_of_current_month(&self, instant: Instant) -> bool {
        self.first_day_of_current_month(instant)
            .map_or(false, |first| first == instant)
    }

    /// The start of the last day of the month containing `instant`.
    pub fn last_day_of_current_month(&self, instant: Instant) -> Result<Instant, OutOfRange> {
        let first = self.first_day_of_current_month(instant)?;
        let next_month = self.add(first, 1, Unit::Month)?;
        self.add(next_month, -1, Unit::Day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn at(ctx: &CalendarContext, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Instant {
        ctx.instant_builder()
            .year(year)
            .month(month)
            .day(day)
            .hour(hour)
            .minute(minute)
            .build()
            .unwrap()
    }

    #[test]
    fn components() {
        let ctx = CalendarContext::default();
        let instant = at(&ctx, 2021, 3, 15, 10, 20);
        assert_eq!(ctx.year(instant), 2021);
        assert_eq!(ctx.month(instant), 3);
        assert_eq!(ctx.day(instant), 15);
        assert_eq!(ctx.hour(instant), 10);
        assert_eq!(ctx.minute(instant), 20);
        assert_eq!(ctx.second(instant), 0);
        assert_eq!(ctx.weekday(instant), Weekday::Monday);
    }

    #[test]
    fn components_depend_on_time_zone() {
        let utc = CalendarContext::default();
        let tokyo = CalendarContext::new(Tz::Asia__Tokyo, crate::Locale::default());
        // 2021-12-31T20:00Z is already New Year's Day in Tokyo.
        let instant = at(&utc, 2021, 12, 31, 20, 0);
        assert_eq!(utc.year(instant), 2021);
        assert_eq!(tokyo.year(instant), 2022);
        assert_eq!(tokyo.month(instant), 1);
        assert_eq!(tokyo.day(instant), 1);
        assert_eq!(tokyo.hour(instant), 5);
        assert_eq!(tokyo.weekday(instant), Weekday::Saturday);
    }

    #[test]
    fn month_boundaries() {
        let ctx = CalendarContext::default();
        let instant = at(&ctx, 2021, 3, 15, 0, 0);
        assert_eq!(
            ctx.first_day_of_current_month(instant).unwrap(),
            at(&ctx, 2021, 3, 1, 0, 0)
        );
        assert_eq!(
            ctx.last_day_of_current_month(instant).unwrap(),
            at(&ctx, 2021, 3, 31, 0, 0)
        );
    }

    #[test]
    fn last_day_handles_month_lengths() {
        let ctx = CalendarContext::default();
        let cases = [
            ((2021, 2, 10), (2021, 2, 28)),
            ((2020, 2, 10), (2020, 2, 29)),
            ((2000, 2, 1), (2000, 2, 29)),
            ((1900, 2, 28), (1900, 2, 28)),
            ((2021, 4, 30), (2021, 4, 30)),
            ((2021, 12, 5), (2021, 12, 31)),
        ];
        for ((year, month, day), (last_year, last_month, last_day)) in cases {
            let instant = at(&ctx, year, month, day, 13, 45);
            assert_eq!(
                ctx.last_day_of_current_month(instant).unwrap(),
                at(&ctx, last_year, last_month, last_day, 0, 0)
            );
        }
    }

    #[test]
    fn first_day_invariants() {
        let ctx = CalendarContext::new(Tz::Europe__Berlin, crate::Locale::default());
        let mut instant = at(&ctx, 2019, 11, 17, 23, 59);
        for _ in 0..40 {
            let first = ctx.first_day_of_current_month(instant).unwrap();
            assert!(first <= instant);
            assert_eq!(ctx.day(first), 1);
            assert_eq!(ctx.hour(first), 0);
            let next = ctx.add(first, 1, Unit::Month).unwrap();
            assert!(instant < next);

            let last = ctx.last_day_of_current_month(instant).unwrap();
            let following = ctx.add(instant, 1, Unit::Month).unwrap();
            assert_eq!(
                ctx.add(last, 1, Unit::Day).unwrap(),
                ctx.first_day_of_current_month(following).unwrap()
            );

            instant = ctx.add(instant, 23, Unit::Day).unwrap();
        }
    }

    #[test]
    fn is_first_day_requires_exact_start() {
        let ctx = CalendarContext::default();
        assert!(ctx.is_first_day_of_current_month(at(&ctx, 2021, 3, 1, 0, 0)));
        assert!(!ctx.is_first_day_of_current_month(at(&ctx, 2021, 3, 1, 0, 1)));
        assert!(!ctx.is_first_day_of_current_month(at(&ctx, 2021, 3, 2, 0, 0)));

        let almost = ctx
            .instant_builder()
            .year(2021)
            .month(3)
            .day(1)
            .nanosecond(1)
            .build()
            .unwrap();
        assert!(!ctx.is_first_day_of_current_month(almost));
    }

    #[test]
    fn month_boundaries_at_extremes() {
        let ctx = CalendarContext::default();
        assert_eq!(ctx.last_day_of_current_month(Instant::max_value()), Err(OutOfRange));
        assert!(!ctx.is_first_day_of_current_month(Instant::max_value()));
        assert!(ctx.first_day_of_current_month(Instant::max_value()).is_ok());
    }
}
