#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Release date and duration of an episode, split into display components.
///
/// # Fields
/// - `day`: day of the month, `1..=31`, or `0` when the release date could not
///   be parsed.
/// - `month`: three letter month abbreviation (e.g. `"Feb"`), or `""` when the
///   release date could not be parsed.
/// - `year`: calendar year, or `0` when the release date could not be parsed.
/// - `hours`: whole hours of the duration. Zero for episodes shorter than an
///   hour.
/// - `minutes`: minutes left after removing `hours`. Never lower than `1`, so
///   an episode shorter than a minute reports one minute.
///
/// `day`, `month` and `year` always come from the same parsed date, or are all
/// the sentinel `(0, "", 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormattedEpisodeDateAndDuration {
    pub day: u32,
    pub month: String,
    pub year: i32,
    pub hours: u64,
    pub minutes: u64,
}

impl FormattedEpisodeDateAndDuration {
    /// Check if the release date was parsed, i.e. the fields are not the
    /// `(0, "", 0)` sentinel.
    pub fn has_release_date(&self) -> bool {
        !self.month.is_empty()
    }
}

impl Default for FormattedEpisodeDateAndDuration {
    fn default() -> Self {
        Self {
            day: 0,
            month: String::new(),
            year: 0,
            hours: 0,
            minutes: 1,
        }
    }
}
