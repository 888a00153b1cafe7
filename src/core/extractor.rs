//! Identifier extraction from raw URL strings.
//!
//! Extraction runs each matcher table in two passes: against the URL as
//! given, then against its percent-decoded form when that differs. Comment
//! identifiers win over post identifiers because a comment URL's primary
//! subject is the comment. Absence of a match is a normal outcome, never an
//! error.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::core::patterns::{ShapeMatcher, PATTERNS};

/// Percent-decode a URL, falling back to the original on invalid sequences.
///
/// Decode failures are swallowed by design: a URL that cannot be decoded is
/// still worth scanning as-is.
pub fn safely_decode_url(url: &str) -> Cow<'_, str> {
    match percent_decode_str(url).decode_utf8() {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!(%err, "percent-decoding failed, scanning the original URL");
            Cow::Borrowed(url)
        }
    }
}

/// Run a matcher table over the raw URL, then over its decoded form.
fn scan_two_pass(matchers: &[ShapeMatcher], url: &str) -> Option<String> {
    if let Some(id) = matchers.iter().find_map(|m| m.capture(url)) {
        return Some(id);
    }

    let decoded = safely_decode_url(url);
    if decoded == url {
        return None;
    }
    matchers.iter().find_map(|m| m.capture(&decoded))
}

/// Find a post-style identifier in a URL.
pub fn find_post_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    scan_two_pass(PATTERNS.post_matchers(), url)
}

/// Find a comment identifier in a URL.
pub fn find_comment_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    scan_two_pass(PATTERNS.comment_matchers(), url)
}

/// Find the identifier a URL is primarily about: the comment identifier when
/// one is present, otherwise the post identifier.
pub fn find_subject_id(url: &str) -> Option<String> {
    find_comment_id(url).or_else(|| find_post_id(url))
}
