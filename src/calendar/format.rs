use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

use crate::calendar::CalendarContext;
use crate::instant::Instant;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid format pattern {pattern:?}")]
pub struct InvalidFormat {
    pub pattern: String,
}

impl CalendarContext {
    /// Render `instant` in this context's time zone using a `strftime`-style
    /// pattern, e.g. `"%Y-%m-%d %H:%M"`. Names such as `%a` and `%B` come from
    /// the context's locale.
    ///
    /// The whole pattern is checked before anything is rendered, so an
    /// unsupported specifier never produces partial output.
    pub fn format(&self, instant: Instant, pattern: &str) -> Result<String, InvalidFormat> {
        let time_locale = self.locale().time_locale();
        let items: Vec<Item> = StrftimeItems::new_with_locale(pattern, time_locale).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            log::debug!("rejecting format pattern {:?}", pattern);
            return Err(invalid(pattern));
        }

        let local = self.local(instant);
        let mut rendered = String::new();
        write!(
            rendered,
            "{}",
            local.format_localized_with_items(items.iter(), time_locale)
        )
        .map_err(|_| {
            log::debug!("failed to render {} with {:?}", instant, pattern);
            invalid(pattern)
        })?;
        Ok(rendered)
    }
}

fn invalid(pattern: &str) -> InvalidFormat {
    InvalidFormat {
        pattern: pattern.to_string(),
    }
}
