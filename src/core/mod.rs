//! Core pipeline stages: pattern matching, extraction, decoding,
//! formatting, and classification.

pub mod classifier;
pub mod decoder;
pub mod extractor;
pub mod formatter;
pub mod patterns;

pub use classifier::{analyze_url, is_linkedin_url};
pub use decoder::{decode_timestamp, decode_timestamp_ms_at, parse_identifier};
pub use extractor::{find_comment_id, find_post_id, find_subject_id};
pub use formatter::{format_timestamp, format_timestamp_at};
pub use patterns::{PatternLibrary, ShapeMatcher, UrlShape, PATTERNS};
