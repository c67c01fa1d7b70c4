use chrono::{Locale, Month, NaiveDate, NaiveTime};

use crate::core::locale;
use crate::types::errors::LocaleError;

/// Lookup from a calendar month to its short display name.
pub trait MonthNames {
    /// Short display name of `month`, e.g. `"Feb"`.
    fn abbreviation(&self, month: Month) -> String;
}

impl<T: MonthNames + ?Sized> MonthNames for &T {
    fn abbreviation(&self, month: Month) -> String {
        (**self).abbreviation(month)
    }
}

/// Fixed English abbreviations (`"Jan"` .. `"Dec"`), independent of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishMonthNames;

impl MonthNames for EnglishMonthNames {
    fn abbreviation(&self, month: Month) -> String {
        // Month::name() is the full English name, all of which are ASCII
        month.name()[..3].to_string()
    }
}

/// Month abbreviations as rendered by `%b` in a given locale.
///
/// Only POSIX and English locales are guaranteed to give three letters; other
/// `%b` tables may be longer or carry a trailing dot (e.g. fr_FR `"févr."`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocaleMonthNames {
    pub locale: Locale,
}

impl LocaleMonthNames {
    /// Builds the lookup for an explicit `locale`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Builds the lookup from a locale name such as `"de_DE"` or
    /// `"fr_FR.UTF-8"`.
    pub fn from_name(name: &str) -> Result<Self, LocaleError> {
        locale::resolve(name).map(Self::new)
    }

    /// Builds the lookup from the process locale (`LC_ALL`, `LC_TIME`, `LANG`).
    ///
    /// Falls back to POSIX when nothing usable is configured.
    pub fn from_env() -> Self {
        Self::new(locale::from_env())
    }
}

impl Default for LocaleMonthNames {
    fn default() -> Self {
        Self::new(Locale::POSIX)
    }
}

impl MonthNames for LocaleMonthNames {
    fn abbreviation(&self, month: Month) -> String {
        // any day works, only the month is rendered
        match NaiveDate::from_ymd_opt(2000, month.number_from_month(), 1) {
            Some(date) => date
                .and_time(NaiveTime::MIN)
                .and_utc()
                .format_localized("%b", self.locale)
                .to_string(),
            None => EnglishMonthNames.abbreviation(month),
        }
    }
}
