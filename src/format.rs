use chrono::{Datelike, Month, NaiveDate};

use crate::core;
use crate::types::episode::FormattedEpisodeDateAndDuration;
use crate::types::month_names::{LocaleMonthNames, MonthNames};

/// Builds a `FormattedEpisodeDateAndDuration` from a release date and a
/// duration, using the month abbreviations of the process locale.
///
/// See [`episode_date_and_duration_with`] for the exact behavior.
pub fn episode_date_and_duration(
    release_date: &str,
    duration_millis: u64,
) -> FormattedEpisodeDateAndDuration {
    episode_date_and_duration_with(release_date, duration_millis, &LocaleMonthNames::from_env())
}

/// Builds a `FormattedEpisodeDateAndDuration` from a release date and a
/// duration, rendering the month through `names`.
///
/// # Parameters
/// - `release_date`: ISO-8601 calendar date (`YYYY-MM-DD`). Anything else is
///   accepted too and yields the `(0, "", 0)` date sentinel.
/// - `duration_millis`: playback duration in milliseconds.
/// - `names`: month abbreviation lookup.
///
/// # Behavior
/// - `hours` is `duration_millis / 3_600_000`.
/// - `minutes` is the floored minute remainder, clamped to at least `1`.
/// - The duration is split whether or not the date parses.
///
/// This never fails: a date parse error is logged at debug level and replaced
/// by the sentinel.
pub fn episode_date_and_duration_with<N: MonthNames>(
    release_date: &str,
    duration_millis: u64,
    names: &N,
) -> FormattedEpisodeDateAndDuration {
    let (hours, minutes) = core::duration::split(duration_millis);

    let (day, month, year) = match core::release_date::parse(release_date) {
        Ok(date) => (date.day(), names.abbreviation(month_of(&date)), date.year()),
        Err(err) => {
            log::debug!("{err}, release date left empty");
            (0, String::new(), 0)
        }
    };

    FormattedEpisodeDateAndDuration {
        day,
        month,
        year,
        hours,
        minutes,
    }
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

fn month_of(date: &NaiveDate) -> Month {
    // month0() is 0..=11
    MONTHS[date.month0() as usize]
}
