//! URL shape classification.
//!
//! Labels a URL independently of whether a timestamp can be recovered from
//! it, so hosts can report precise failures ("this is a profile URL, which
//! carries no timestamp") instead of a generic mismatch. Checks run in a
//! fixed priority order because shapes overlap: a comment permalink also
//! contains its parent post's path.

use url::Url;

use crate::core::patterns::PATTERNS;
use crate::types::{Classification, UrlAnalysis};

/// Whether the string addresses a LinkedIn host.
///
/// When the URL parses, the hostname is authoritative (`linkedin.com` or a
/// subdomain of it). Fragments and malformed inputs fall back to a substring
/// check, matching the lenient behavior extraction itself relies on.
pub fn is_linkedin_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| {
                let host = host.to_ascii_lowercase();
                host == "linkedin.com" || host.ends_with(".linkedin.com")
            })
            .unwrap_or(false),
        Err(_) => url.to_ascii_lowercase().contains("linkedin.com"),
    }
}

/// Classify a URL by shape.
///
/// # Examples
///
/// ```
/// use linkstamp::{analyze_url, Classification};
///
/// let analysis = analyze_url("https://www.linkedin.com/in/johndoe/");
/// assert!(!analysis.is_valid);
/// assert_eq!(analysis.kind, Classification::Profile);
///
/// let analysis = analyze_url("https://example.com/page");
/// assert_eq!(analysis.kind, Classification::NotLinkedin);
/// ```
pub fn analyze_url(url: &str) -> UrlAnalysis {
    if url.is_empty() {
        return UrlAnalysis::invalid(Classification::Unknown, "Empty or invalid URL");
    }

    if !is_linkedin_url(url) {
        return UrlAnalysis::invalid(Classification::NotLinkedin, "Not a LinkedIn URL");
    }

    let lower = url.to_ascii_lowercase();

    // Comment first: comment permalinks embed the post path as well.
    if lower.contains("comment") {
        return UrlAnalysis::valid(Classification::Comment);
    }
    if lower.contains("/posts/") {
        return UrlAnalysis::valid(Classification::Post);
    }
    if lower.contains("/feed/update/") {
        return UrlAnalysis::valid(Classification::FeedUpdate);
    }
    if lower.contains("/pulse/") {
        return UrlAnalysis::valid(Classification::Article);
    }
    if lower.contains("/shares/") {
        return UrlAnalysis::valid(Classification::Share);
    }
    if lower.contains("/in/") && !lower.contains("activity") {
        return UrlAnalysis::invalid(
            Classification::Profile,
            "Profile URL - no timestamp available",
        );
    }
    if lower.contains("/company/") {
        return UrlAnalysis::invalid(
            Classification::Company,
            "Company URL - no timestamp available",
        );
    }

    if PATTERNS.has_activity_token(url) {
        return UrlAnalysis::valid(Classification::Activity);
    }

    UrlAnalysis::invalid(Classification::Unknown, "Unsupported LinkedIn URL format")
}
