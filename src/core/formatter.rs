//! Multi-format timestamp rendering.
//!
//! Produces the four representations of a decoded timestamp: epoch seconds,
//! ISO-8601, a long localized date/time, and a tiered relative phrase. The
//! renderer is deterministic given `(value, now)`; only the relative phrase
//! depends on `now` at all.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::TimestampResult;

/// Inputs below this magnitude are second-scale; at or above, millisecond-scale.
pub const SECONDS_MS_PIVOT: i64 = 10_000_000_000;

/// ISO-8601 with millisecond precision and a literal UTC designator.
pub(crate) const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Full weekday, full month, day, year, hour:minute, zone name.
pub(crate) const LOCAL_FORMAT: &str = "%A, %B %-d, %Y, %I:%M %p UTC";

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const WEEK: i64 = 604_800;
const FOUR_WEEKS: i64 = 2_419_200;

/// Render a timestamp against an explicit `now`.
///
/// Accepts both second- and millisecond-scale inputs, disambiguated by
/// magnitude. Non-positive and unrepresentable values yield `None`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use linkstamp::format_timestamp_at;
///
/// let now = Utc.with_ymd_and_hms(2024, 7, 29, 0, 0, 0).unwrap();
/// let result = format_timestamp_at(1638360000, now).unwrap();
/// assert_eq!(result.unix, 1638360000);
/// assert_eq!(result.iso, "2021-12-01T12:00:00.000Z");
/// ```
pub fn format_timestamp_at(value: i64, now: DateTime<Utc>) -> Option<TimestampResult> {
    if value <= 0 {
        return None;
    }

    let millis = if value < SECONDS_MS_PIVOT {
        value * 1_000
    } else {
        value
    };

    let Some(instant) = DateTime::<Utc>::from_timestamp_millis(millis) else {
        debug!(value, "timestamp is not representable as a date");
        return None;
    };

    Some(TimestampResult {
        unix: millis / 1_000,
        iso: instant.format(ISO_FORMAT).to_string(),
        local: instant.format(LOCAL_FORMAT).to_string(),
        relative: relative_phrase(&instant, &now),
    })
}

/// Render a timestamp against the current wall clock.
pub fn format_timestamp(value: i64) -> Option<TimestampResult> {
    format_timestamp_at(value, Utc::now())
}

/// Tiered relative phrase for the elapsed time between `instant` and `now`.
///
/// Future instants (negative elapsed time) read as "Just now"; beyond four
/// weeks the phrase falls back to a short date.
fn relative_phrase(instant: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.timestamp() - instant.timestamp();

    if elapsed < 10 {
        "Just now".to_string()
    } else if elapsed < MINUTE {
        pluralize(elapsed, "second")
    } else if elapsed < HOUR {
        pluralize(elapsed / MINUTE, "minute")
    } else if elapsed < DAY {
        pluralize(elapsed / HOUR, "hour")
    } else if elapsed < WEEK {
        pluralize(elapsed / DAY, "day")
    } else if elapsed < FOUR_WEEKS {
        pluralize(elapsed / WEEK, "week")
    } else {
        instant.format("%-m/%-d/%Y").to_string()
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
