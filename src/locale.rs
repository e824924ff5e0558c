use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;

/// Locale data used for formatting and weekday names.
///
/// Symbol tables are ordered Sunday first, matching [`Weekday`](crate::Weekday)
/// ordinals. Tables supplied through [`Locale::custom`] are not validated; a
/// table with fewer than seven entries simply yields no symbol for the missing
/// weekdays.
#[derive(Debug, Clone)]
pub struct Locale {
    identifier: String,
    time_locale: chrono::Locale,
    very_short_weekday_symbols: Vec<String>,
    short_weekday_symbols: Vec<String>,
}

struct BuiltinLocale {
    identifier: &'static str,
    time_locale: chrono::Locale,
    very_short_weekday_symbols: [&'static str; 7],
    short_weekday_symbols: [&'static str; 7],
}

static BUILTIN_LOCALES: [BuiltinLocale; 5] = [
    BuiltinLocale {
        identifier: "en_US",
        time_locale: chrono::Locale::en_US,
        very_short_weekday_symbols: ["S", "M", "T", "W", "T", "F", "S"],
        short_weekday_symbols: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    },
    BuiltinLocale {
        identifier: "en_GB",
        time_locale: chrono::Locale::en_GB,
        very_short_weekday_symbols: ["S", "M", "T", "W", "T", "F", "S"],
        short_weekday_symbols: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    },
    BuiltinLocale {
        identifier: "de_DE",
        time_locale: chrono::Locale::de_DE,
        very_short_weekday_symbols: ["S", "M", "D", "M", "D", "F", "S"],
        short_weekday_symbols: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    },
    BuiltinLocale {
        identifier: "fr_FR",
        time_locale: chrono::Locale::fr_FR,
        very_short_weekday_symbols: ["D", "L", "M", "M", "J", "V", "S"],
        short_weekday_symbols: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    },
    BuiltinLocale {
        identifier: "es_ES",
        time_locale: chrono::Locale::es_ES,
        very_short_weekday_symbols: ["D", "L", "M", "X", "J", "V", "S"],
        short_weekday_symbols: ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
    },
];

lazy_static! {
    static ref LOCALE_CACHE: RwLock<HashMap<String, Arc<Locale>>> = RwLock::new(HashMap::new());
}

impl Locale {
    pub const DEFAULT_IDENTIFIER: &'static str = "en_US";

    /// Look up one of the built-in locales, e.g. `"en_US"` or `"fr_FR"`.
    ///
    /// Resolved locales are cached for the lifetime of the process, so repeated
    /// lookups of the same identifier share one allocation.
    pub fn named(identifier: &str) -> Option<Arc<Locale>> {
        // Poisoning leaves the map intact.
        if let Some(locale) = LOCALE_CACHE
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(identifier)
        {
            return Some(locale.clone());
        }

        let builtin = BUILTIN_LOCALES
            .iter()
            .find(|builtin| builtin.identifier == identifier)?;
        let locale = Arc::new(Locale::from_builtin(builtin));
        log::trace!("caching locale {}", identifier);
        let mut cache = LOCALE_CACHE.write().unwrap_or_else(|e| e.into_inner());
        Some(
            cache
                .entry(identifier.to_string())
                .or_insert(locale)
                .clone(),
        )
    }

    pub fn custom<S: Into<String>>(
        identifier: &str,
        time_locale: chrono::Locale,
        very_short_weekday_symbols: impl IntoIterator<Item = S>,
        short_weekday_symbols: impl IntoIterator<Item = S>,
    ) -> Self {
        Locale {
            identifier: identifier.to_string(),
            time_locale,
            very_short_weekday_symbols: very_short_weekday_symbols
                .into_iter()
                .map(Into::into)
                .collect(),
            short_weekday_symbols: short_weekday_symbols.into_iter().map(Into::into).collect(),
        }
    }

    fn from_builtin(builtin: &BuiltinLocale) -> Self {
        Locale::custom(
            builtin.identifier,
            builtin.time_locale,
            builtin.very_short_weekday_symbols,
            builtin.short_weekday_symbols,
        )
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn time_locale(&self) -> chrono::Locale {
        self.time_locale
    }

    pub fn very_short_weekday_symbols(&self) -> &[String] {
        &self.very_short_weekday_symbols
    }

    pub fn short_weekday_symbols(&self) -> &[String] {
        &self.short_weekday_symbols
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::from_builtin(&BUILTIN_LOCALES[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_locales() {
        let locale = Locale::named("fr_FR").unwrap();
        assert_eq!(locale.identifier(), "fr_FR");
        assert_eq!(locale.short_weekday_symbols().len(), 7);
        assert_eq!(locale.short_weekday_symbols()[0], "dim.");

        assert!(Locale::named("xx_XX").is_none());
        assert!(Locale::named("").is_none());
    }

    #[test]
    fn named_locales_are_cached() {
        let first = Locale::named("de_DE").unwrap();
        let second = Locale::named("de_DE").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn builtin_tables_are_complete() {
        for builtin in BUILTIN_LOCALES.iter() {
            let locale = Locale::named(builtin.identifier).unwrap();
            assert_eq!(locale.very_short_weekday_symbols().len(), 7);
            assert_eq!(locale.short_weekday_symbols().len(), 7);
        }
    }

    #[test]
    fn default_is_en_us() {
        let locale = Locale::default();
        assert_eq!(locale.identifier(), Locale::DEFAULT_IDENTIFIER);
        assert_eq!(locale.short_weekday_symbols()[5], "Fri");
    }

    #[test]
    fn custom_locale_keeps_short_tables() {
        let locale = Locale::custom(
            "xx_SHORT",
            chrono::Locale::en_US,
            ["a", "b"],
            ["aa", "bb", "cc", "dd", "ee"],
        );
        assert_eq!(locale.identifier(), "xx_SHORT");
        assert_eq!(locale.very_short_weekday_symbols().len(), 2);
        assert_eq!(locale.short_weekday_symbols().len(), 5);
    }
}
