//! Core data structures for URL classification and timestamp results.

use std::fmt;

/// A decoded timestamp rendered in the four supported representations.
///
/// Created only by the formatter; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampResult {
    /// Seconds since the Unix epoch.
    pub unix: i64,
    /// ISO-8601 combined date and time with UTC offset (e.g., "2024-07-28T23:22:30.548Z").
    pub iso: String,
    /// Long-form rendering: full weekday, full month, day, year, hour:minute, zone name.
    pub local: String,
    /// Tiered relative phrase ("Just now", "3 hours ago", ...) or a short date.
    pub relative: String,
}

/// The URL shape a given input matches, independent of whether a timestamp
/// can actually be recovered from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `/posts/<slug>_<id>` member post URL.
    Post,
    /// `/feed/update/urn:li:activity:<id>` feed permalink.
    FeedUpdate,
    /// Any URL carrying a comment identifier.
    Comment,
    /// `/pulse/` long-form article.
    Article,
    /// `/shares/<id>` share URL.
    Share,
    /// No recognized path shape, but an explicit `activity:<id>` token is present.
    Activity,
    /// `/in/` member profile. Carries no timestamp.
    Profile,
    /// `/company/` page. Carries no timestamp.
    Company,
    /// Host is not linkedin.com.
    NotLinkedin,
    /// Unrecognized shape.
    Unknown,
}

impl Classification {
    /// Stable string label for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Post => "post",
            Classification::FeedUpdate => "feed-update",
            Classification::Comment => "comment",
            Classification::Article => "article",
            Classification::Share => "share",
            Classification::Activity => "activity",
            Classification::Profile => "profile",
            Classification::Company => "company",
            Classification::NotLinkedin => "not-linkedin",
            Classification::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of pre-flight URL analysis.
///
/// `is_valid` means the shape can in principle carry a timestamp; it does not
/// guarantee extraction will succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlAnalysis {
    /// Whether this URL shape can carry an extractable timestamp.
    pub is_valid: bool,
    /// The recognized shape.
    pub kind: Classification,
    /// Human-readable explanation for invalid or unrecognized shapes.
    pub reason: Option<String>,
}

impl UrlAnalysis {
    /// Analysis for a shape that can carry a timestamp.
    pub fn valid(kind: Classification) -> Self {
        Self {
            is_valid: true,
            kind,
            reason: None,
        }
    }

    /// Analysis for a shape that cannot carry a timestamp.
    pub fn invalid(kind: Classification, reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            kind,
            reason: Some(reason.into()),
        }
    }
}
