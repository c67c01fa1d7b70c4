use chrono::NaiveDate;

use crate::types::errors::ReleaseDateError;

// Chrono parsing pattern, applied once the shape has been checked
const ISO_DATE_FMT: &str = "%Y-%m-%d";

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// Chrono alone accepts single digit months/days and leading whitespace, so
/// the text is first checked against the strict shape: a four digit year (or a
/// negative year of at least four digits, or a `+` year with more than four),
/// then two digit month and day.
pub(crate) fn parse(text: &str) -> Result<NaiveDate, ReleaseDateError> {
    if !has_iso_shape(text) {
        return Err(ReleaseDateError::Malformed {
            input: text.to_string(),
        });
    }

    NaiveDate::parse_from_str(text, ISO_DATE_FMT).map_err(|source| {
        ReleaseDateError::InvalidDate {
            input: text.to_string(),
            source,
        }
    })
}

fn has_iso_shape(text: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    // the year may carry a sign, so split from the right
    let mut parts = text.rsplitn(3, '-');
    let (Some(day), Some(month), Some(year)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    // '+' is only allowed past four digits, '-' on any year of four or more
    let year_ok: bool = if let Some(digits) = year.strip_prefix('+') {
        digits.len() > 4 && all_digits(digits)
    } else if let Some(digits) = year.strip_prefix('-') {
        digits.len() >= 4 && all_digits(digits)
    } else {
        year.len() == 4 && all_digits(year)
    };

    year_ok && month.len() == 2 && all_digits(month) && day.len() == 2 && all_digits(day)
}
