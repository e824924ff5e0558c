//! Calendar conveniences over a point in time: derived fields, month
//! boundaries, calendar-aware arithmetic, localized formatting and weekday
//! names.
//!
//! All calendar interpretation goes through an explicit [`CalendarContext`].
//!
//! ```
//! use date_additions::{CalendarContext, Unit, Weekday};
//!
//! let ctx = CalendarContext::default();
//! let instant = ctx.instant_builder().year(2021).month(1).day(31).hour(10).build().unwrap();
//! let next = ctx.add(instant, 1, Unit::Month).unwrap();
//! assert_eq!((ctx.month(next), ctx.day(next)), (2, 28));
//! assert_eq!(Weekday::Friday.short_symbol(ctx.locale()), Some("Fri"));
//! ```

pub use calendar::{
    BuildError, CalendarContext, CalendarContextBuilder, ConfigError, InstantBuilder,
    InvalidFormat, Unit,
};
pub use chrono_tz::Tz;
pub use instant::{Instant, OutOfRange};
pub use locale::Locale;
pub use weekday::Weekday;

mod calendar;
mod instant;
mod locale;
mod weekday;
