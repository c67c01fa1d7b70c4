use episode_format::{
    EnglishMonthNames, FormattedEpisodeDateAndDuration, Locale, LocaleMonthNames,
    episode_date_and_duration_with,
};
use pretty_assertions::assert_eq;

fn format(date: &str, millis: u64) -> FormattedEpisodeDateAndDuration {
    episode_date_and_duration_with(date, millis, &EnglishMonthNames)
}

fn expected(
    day: u32,
    month: &str,
    year: i32,
    hours: u64,
    minutes: u64,
) -> FormattedEpisodeDateAndDuration {
    FormattedEpisodeDateAndDuration {
        day,
        month: month.to_string(),
        year,
        hours,
        minutes,
    }
}

#[test]
fn hour_and_two_minutes() {
    assert_eq!(format("2023-02-15", 3_725_000), expected(15, "Feb", 2023, 1, 2));
}

#[test]
fn malformed_date_keeps_duration() {
    assert_eq!(format("not-a-date", 45_000), expected(0, "", 0, 0, 1));
}

#[test]
fn zero_duration_on_new_years_eve() {
    assert_eq!(format("2023-12-31", 0), expected(31, "Dec", 2023, 0, 1));
}

#[test]
fn exact_hours_clamp_minutes() {
    assert_eq!(format("2024-01-01", 7_200_000), expected(1, "Jan", 2024, 2, 1));
}

#[test]
fn hours_are_floored() {
    for (millis, hours) in [(0, 0), (59_999, 0), (3_600_000, 1), (7_384_000, 2)] {
        let result = format("2022-06-10", millis);
        assert_eq!(result.hours, hours, "{millis} ms");
        assert!(result.minutes >= 1);
    }
}

#[test]
fn malformed_dates_yield_sentinel() {
    for text in ["", "2023", "2023-02", "15/02/2023", "2023-02-15T00:00", "2023-02-30"] {
        let result = format(text, 5_400_000);
        assert_eq!(result, expected(0, "", 0, 1, 30), "{text:?}");
        assert!(!result.has_release_date());
    }
}

#[test]
fn negative_years_are_dates() {
    assert_eq!(format("-0001-01-01", 60_000), expected(1, "Jan", -1, 0, 1));
    assert_eq!(format("-2023-02-15", 0), expected(15, "Feb", -2023, 0, 1));
    assert_eq!(format("-123-02-15", 0), expected(0, "", 0, 0, 1));
}

#[test]
fn same_inputs_same_result() {
    assert_eq!(format("2020-02-29", 61_000), format("2020-02-29", 61_000));
}

#[test]
fn huge_duration_is_accepted() {
    let result = format("2023-02-15", u64::MAX);
    assert_eq!(result.hours, u64::MAX / 3_600_000);
    assert!(result.has_release_date());
}

#[test]
fn default_is_sentinel_with_one_minute() {
    assert_eq!(FormattedEpisodeDateAndDuration::default(), expected(0, "", 0, 0, 1));
}

#[test]
fn german_locale() {
    let names = LocaleMonthNames::new(Locale::de_DE);
    let result = episode_date_and_duration_with("2023-12-24", 2_700_000, &names);
    assert_eq!(result, expected(24, "Dez", 2023, 0, 45));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_to_json() {
    let json = serde_json::to_value(format("2023-02-15", 3_725_000)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"day": 15, "month": "Feb", "year": 2023, "hours": 1, "minutes": 2})
    );
    let back: FormattedEpisodeDateAndDuration = serde_json::from_value(json).unwrap();
    assert_eq!(back, format("2023-02-15", 3_725_000));
}
