//! The pattern library: ordered URL-shape matchers.
//!
//! Each matcher recognizes one URL layout and extracts the identifier from a
//! single fixed capture group. Matchers are tried in a fixed order, most
//! specific first; the generic 19-21-digit fallback comes last because it can
//! match unrelated digit runs elsewhere in a URL.

use std::sync::LazyLock;

use regex::Regex;

/// The URL layout a matcher recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlShape {
    /// `feed/update/urn:li:activity:<id>` feed permalink.
    FeedUpdate,
    /// Explicit `activity:<id>` token anywhere in the URL.
    ActivityToken,
    /// `/shares/<id>`.
    Share,
    /// `/posts/<slug>_<id>` followed by `_` or `/`.
    Post,
    /// `/pulse/<slug>_<id>` followed by `_` or `/`.
    PulseArticle,
    /// `fsd_comment:(<id>,urn:li:activity:<parent>)`.
    CommentFsd,
    /// Percent-encoded `commentUrn=urn%3Ali%3Acomment%3A(<id>%2C...)`.
    CommentUrn,
    /// Any standalone run of 19-21 digits not adjacent to other digits.
    NumericFallback,
}

/// A single URL-shape matcher: shape tag, pattern, and the capture group that
/// holds the identifier digits.
#[derive(Debug)]
pub struct ShapeMatcher {
    shape: UrlShape,
    regex: Regex,
    group: usize,
}

impl ShapeMatcher {
    fn new(shape: UrlShape, pattern: &str, group: usize) -> Self {
        Self {
            shape,
            // Patterns are fixed string literals; a compile failure is a
            // defect in this table, not a runtime condition.
            regex: Regex::new(pattern).expect("shape matcher pattern must compile"),
            group,
        }
    }

    /// The shape this matcher recognizes.
    pub fn shape(&self) -> UrlShape {
        self.shape
    }

    /// Run the matcher against a URL, returning the captured identifier.
    pub fn capture(&self, url: &str) -> Option<String> {
        self.regex
            .captures(url)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str().to_string())
    }
}

/// The fixed, ordered matcher tables used by the identifier extractor.
#[derive(Debug)]
pub struct PatternLibrary {
    post: Vec<ShapeMatcher>,
    comment: Vec<ShapeMatcher>,
}

impl PatternLibrary {
    fn build() -> Self {
        // Post matchers in specificity order; the bare numeric fallback is
        // last because dates and counters elsewhere in a URL can reach 19
        // digits only when standing alone.
        let post = vec![
            ShapeMatcher::new(
                UrlShape::FeedUpdate,
                r"(?i)feed/update/urn:li:activity:(\d{19,21})",
                1,
            ),
            ShapeMatcher::new(UrlShape::ActivityToken, r"(?i)activity:(\d{19,21})", 1),
            ShapeMatcher::new(UrlShape::Share, r"(?i)/shares/([0-9]{19,21})", 1),
            ShapeMatcher::new(UrlShape::Post, r"(?i)/posts/[^/]+_([0-9]{19,21})(?:_|/)", 1),
            ShapeMatcher::new(
                UrlShape::PulseArticle,
                r"(?i)/pulse/[^/]+_([0-9]{19,21})(?:_|/)",
                1,
            ),
            ShapeMatcher::new(
                UrlShape::NumericFallback,
                r"(?:^|[^0-9])([0-9]{19,21})(?:$|[^0-9])",
                1,
            ),
        ];

        let comment = vec![
            ShapeMatcher::new(
                UrlShape::CommentFsd,
                r"(?i)fsd_comment:\((\d{19,21}),urn:li:activity:\d+\)",
                1,
            ),
            ShapeMatcher::new(
                UrlShape::CommentUrn,
                r"(?i)commentUrn=urn%3Ali%3Acomment%3A\((\d{19,21})%2C",
                1,
            ),
        ];

        Self { post, comment }
    }

    /// Matchers for post-style identifiers, in trial order.
    pub fn post_matchers(&self) -> &[ShapeMatcher] {
        &self.post
    }

    /// Matchers for comment identifiers, in trial order.
    pub fn comment_matchers(&self) -> &[ShapeMatcher] {
        &self.comment
    }

    /// Whether the URL carries an explicit `activity:<id>` token.
    pub fn has_activity_token(&self, url: &str) -> bool {
        self.post
            .iter()
            .filter(|m| m.shape() == UrlShape::ActivityToken)
            .any(|m| m.capture(url).is_some())
    }
}

/// Process-wide pattern library, compiled on first use.
pub static PATTERNS: LazyLock<PatternLibrary> = LazyLock::new(PatternLibrary::build);
