//! Error types for identifier parsing and timestamp decoding.

use thiserror::Error;

/// Errors that can occur while parsing an identifier or decoding its timestamp.
///
/// The public extraction surface reports absence as `None`; these values are
/// returned by the lower-level `Result`-based steps so composing callers can
/// tell why an identifier was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkstampError {
    /// The identifier is empty, contains non-digit characters, or overflows
    /// the supported integer width.
    #[error("Identifier must be an unsigned decimal numeral")]
    MalformedIdentifier,

    /// The decoded timestamp predates the platform inception floor.
    #[error("Decoded timestamp {0} ms predates the platform inception floor")]
    TimestampTooOld(i64),

    /// The decoded timestamp is further in the future than the allowed skew.
    #[error("Decoded timestamp {0} ms exceeds the allowed future skew")]
    TimestampInFuture(i64),

    /// The timestamp value cannot be represented as a calendar date.
    #[error("Timestamp value is not representable as a date")]
    UnrepresentableTimestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LinkstampError::MalformedIdentifier.to_string(),
            "Identifier must be an unsigned decimal numeral"
        );

        assert_eq!(
            LinkstampError::TimestampTooOld(29434392).to_string(),
            "Decoded timestamp 29434392 ms predates the platform inception floor"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            LinkstampError::MalformedIdentifier,
            LinkstampError::MalformedIdentifier
        );
        assert_ne!(
            LinkstampError::MalformedIdentifier,
            LinkstampError::UnrepresentableTimestamp
        );
        assert_ne!(
            LinkstampError::TimestampTooOld(1),
            LinkstampError::TimestampTooOld(2)
        );
    }
}
