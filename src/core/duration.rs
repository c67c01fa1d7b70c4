const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Splits a duration in milliseconds into whole hours and remaining minutes.
///
/// Minutes are floored, then clamped to at least `1`.
#[inline]
pub(crate) fn split(duration_millis: u64) -> (u64, u64) {
    let hours: u64 = duration_millis / MILLIS_PER_HOUR;
    let minutes: u64 = (duration_millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    (hours, minutes.max(1))
}
