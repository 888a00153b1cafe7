//! Tests for multi-format timestamp rendering.

use chrono::{TimeZone, Utc};
use linkstamp::{format_timestamp_at, SECONDS_MS_PIVOT};

fn reference_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 29, 12, 0, 0).unwrap()
}

#[test]
fn test_four_fields_for_a_known_instant() {
    // 2021-12-01T12:00:00Z
    let result = format_timestamp_at(1_638_360_000, reference_now()).unwrap();

    assert_eq!(result.unix, 1_638_360_000);
    assert_eq!(result.iso, "2021-12-01T12:00:00.000Z");
    assert_eq!(result.local, "Wednesday, December 1, 2021, 12:00 PM UTC");
    assert_eq!(result.relative, "12/1/2021");
}

#[test]
fn test_magnitude_disambiguation() {
    // The same instant, given in seconds and in milliseconds.
    let seconds = format_timestamp_at(1_638_360_000, reference_now()).unwrap();
    let millis = format_timestamp_at(1_638_360_000_000, reference_now()).unwrap();

    assert_eq!(seconds.unix, millis.unix);
    assert_eq!(seconds.iso, millis.iso);
    assert_eq!(seconds.local, millis.local);

    // The pivot itself is millisecond-scale.
    let at_pivot = format_timestamp_at(SECONDS_MS_PIVOT, reference_now()).unwrap();
    assert_eq!(at_pivot.unix, SECONDS_MS_PIVOT / 1000);
}

#[test]
fn test_millisecond_precision_survives_in_iso() {
    let result = format_timestamp_at(1_722_208_950_548, reference_now()).unwrap();
    assert_eq!(result.iso, "2024-07-28T23:22:30.548Z");
    assert_eq!(result.unix, 1_722_208_950);
}

#[test]
fn test_relative_tier_boundaries() {
    let now = reference_now();
    let relative =
        |secs_ago: i64| format_timestamp_at(now.timestamp() - secs_ago, now).unwrap().relative;

    assert_eq!(relative(0), "Just now");
    assert_eq!(relative(9), "Just now");
    assert_eq!(relative(10), "10 seconds ago");
    assert_eq!(relative(59), "59 seconds ago");
    assert_eq!(relative(60), "1 minute ago");
    assert_eq!(relative(3_599), "59 minutes ago");
    assert_eq!(relative(3_600), "1 hour ago");
    assert_eq!(relative(86_399), "23 hours ago");
    assert_eq!(relative(86_400), "1 day ago");
    assert_eq!(relative(604_799), "6 days ago");
    assert_eq!(relative(604_800), "1 week ago");
    assert_eq!(relative(2_419_199), "3 weeks ago");
}

#[test]
fn test_pluralization_is_singular_exactly_at_one() {
    let now = reference_now();
    let relative =
        |secs_ago: i64| format_timestamp_at(now.timestamp() - secs_ago, now).unwrap().relative;

    assert_eq!(relative(60), "1 minute ago");
    assert_eq!(relative(120), "2 minutes ago");
    assert_eq!(relative(3_600), "1 hour ago");
    assert_eq!(relative(7_200), "2 hours ago");
    assert_eq!(relative(86_400), "1 day ago");
    assert_eq!(relative(604_800), "1 week ago");
}

#[test]
fn test_beyond_four_weeks_is_a_short_date() {
    let now = reference_now();
    let result = format_timestamp_at(now.timestamp() - 2_419_200, now).unwrap();
    // 28 days before 2024-07-29.
    assert_eq!(result.relative, "7/1/2024");
}

#[test]
fn test_deterministic_for_fixed_now() {
    let now = reference_now();
    assert_eq!(
        format_timestamp_at(1_722_208_950, now),
        format_timestamp_at(1_722_208_950, now)
    );
}

#[test]
fn test_round_trip_within_window() {
    for t in [1_100_000_000_i64, 1_500_000_000, 1_722_208_950] {
        assert_eq!(format_timestamp_at(t, reference_now()).unwrap().unix, t);
    }
}

#[test]
fn test_invalid_values_yield_nothing() {
    assert!(format_timestamp_at(0, reference_now()).is_none());
    assert!(format_timestamp_at(-1, reference_now()).is_none());
    assert!(format_timestamp_at(i64::MAX, reference_now()).is_none());
}

#[test]
fn test_shared_format_cache_is_stable() {
    let first = linkstamp::format_timestamp(1_638_360_000).unwrap();
    let second = linkstamp::format_timestamp(1_638_360_000).unwrap();
    // A cache hit returns output identical to the first computation,
    // relative phrase included.
    assert_eq!(first, second);
}
