use crate::locale::Locale;

/// Day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Weekday> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// The locale's narrowest name for the day, e.g. "F" for Friday in `en_US`.
    ///
    /// Returns `None` if the locale's table has no entry for this day.
    pub fn very_short_symbol(self, locale: &Locale) -> Option<&str> {
        symbol_at(locale.very_short_weekday_symbols(), self)
    }

    /// The locale's abbreviated name for the day, e.g. "Fri" for Friday in `en_US`.
    ///
    /// Returns `None` if the locale's table has no entry for this day.
    pub fn short_symbol(self, locale: &Locale) -> Option<&str> {
        symbol_at(locale.short_weekday_symbols(), self)
    }
}

fn symbol_at(table: &[String], weekday: Weekday) -> Option<&str> {
    table.get(weekday.ordinal() as usize).map(String::as_str)
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}
