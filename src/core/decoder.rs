//! Snowflake-style timestamp decoding.
//!
//! Platform identifiers carry a millisecond epoch timestamp in their high 41
//! bits; the low 22 bits are intra-millisecond sequence and shard data and
//! are discarded. Decoding shifts the identifier right by 22 and validates
//! the result against an accepted window: no earlier than the platform
//! inception floor, no later than now plus a generous future allowance (the
//! slack absorbs clock drift and synthetic fixtures).

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::LinkstampError;

/// Bits discarded from the low end of an identifier.
pub const TIMESTAMP_SHIFT: u32 = 22;

/// Accepted-window floor: 2002-01-01T00:00:00Z, in milliseconds.
pub const INCEPTION_FLOOR_MS: i64 = 1_009_843_200_000;

/// Accepted-window future allowance beyond "now": ten years, in milliseconds.
pub const FUTURE_SKEW_MS: i64 = 315_360_000_000;

/// Parse an identifier as an unsigned decimal numeral.
///
/// Width validation (19-21 digits) belongs to the pattern library; this step
/// only rejects strings that are not numerals at all. `u128` covers every
/// digit run the patterns can produce (a 21-digit numeral exceeds `u64`).
pub fn parse_identifier(id: &str) -> Result<u128, LinkstampError> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LinkstampError::MalformedIdentifier);
    }
    id.parse::<u128>()
        .map_err(|_| LinkstampError::MalformedIdentifier)
}

/// Decode an identifier into milliseconds since the Unix epoch, validating
/// the accepted window against the supplied `now`.
pub fn decode_timestamp_ms_at(id: &str, now: DateTime<Utc>) -> Result<i64, LinkstampError> {
    let numeral = parse_identifier(id)?;
    let shifted = numeral >> TIMESTAMP_SHIFT;

    let millis = i64::try_from(shifted).map_err(|_| LinkstampError::TimestampInFuture(i64::MAX))?;

    if millis < INCEPTION_FLOOR_MS {
        return Err(LinkstampError::TimestampTooOld(millis));
    }
    let ceiling = now.timestamp_millis().saturating_add(FUTURE_SKEW_MS);
    if millis > ceiling {
        return Err(LinkstampError::TimestampInFuture(millis));
    }

    Ok(millis)
}

/// Decode an identifier into milliseconds since the Unix epoch.
///
/// Absence is the normal failure mode: out-of-window and malformed
/// identifiers both yield `None`.
///
/// # Examples
///
/// ```
/// use linkstamp::decode_timestamp;
///
/// let millis = decode_timestamp("7223467890123456789").unwrap();
/// assert_eq!(millis, 1722208950548);
///
/// // Too short: the shifted value lands before the platform existed.
/// assert_eq!(decode_timestamp("123456789012345"), None);
/// ```
pub fn decode_timestamp(id: &str) -> Option<i64> {
    match decode_timestamp_ms_at(id, Utc::now()) {
        Ok(millis) => Some(millis),
        Err(err) => {
            warn!(identifier = id, %err, "timestamp decode failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_decode_known_identifier() {
        // 7223467890123456789 >> 22 == 1722208950548 (2024-07-28T23:22:30.548Z)
        let millis = decode_timestamp_ms_at("7223467890123456789", fixed_now()).unwrap();
        assert_eq!(millis, 1_722_208_950_548);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let a = decode_timestamp("7223467890123456789");
        let b = decode_timestamp("7223467890123456789");
        assert_eq!(a, b);
        assert_eq!(a, Some(1_722_208_950_548));
    }

    #[test]
    fn test_short_identifier_decodes_below_floor() {
        // 15 digits shift down to 1970 territory, well under the 2002 floor.
        let err = decode_timestamp_ms_at("123456789012345", fixed_now()).unwrap_err();
        assert_eq!(err, LinkstampError::TimestampTooOld(29_434_392));
        assert_eq!(decode_timestamp("123456789012345"), None);
    }

    #[test]
    fn test_future_identifier_rejected() {
        // i64::MAX >> 22 lands in 2039, beyond 2025 + 10 years.
        let err = decode_timestamp_ms_at("9223372036854775807", fixed_now()).unwrap_err();
        assert_eq!(err, LinkstampError::TimestampInFuture(2_199_023_255_551));
    }

    #[test]
    fn test_21_digit_identifier_exceeding_u64_rejected_as_future() {
        let err = decode_timestamp_ms_at("999999999999999999999", fixed_now()).unwrap_err();
        assert!(matches!(err, LinkstampError::TimestampInFuture(_)));
    }

    #[test]
    fn test_malformed_identifiers() {
        let too_wide = "9".repeat(40);
        for id in ["", "12a34", "-123", " 7223467890123456789", too_wide.as_str()] {
            assert_eq!(
                parse_identifier(id).unwrap_err(),
                LinkstampError::MalformedIdentifier,
                "expected malformed: {id:?}"
            );
        }
    }

    #[test]
    fn test_floor_boundary_is_inclusive() {
        // An identifier decoding exactly to the floor is accepted.
        let id = ((INCEPTION_FLOOR_MS as u128) << TIMESTAMP_SHIFT).to_string();
        let millis = decode_timestamp_ms_at(&id, fixed_now()).unwrap();
        assert_eq!(millis, INCEPTION_FLOOR_MS);

        let below = (((INCEPTION_FLOOR_MS - 1) as u128) << TIMESTAMP_SHIFT).to_string();
        assert!(decode_timestamp_ms_at(&below, fixed_now()).is_err());
    }
}
