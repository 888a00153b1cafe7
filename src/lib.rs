//! LINKSTAMP - LinkedIn URL timestamp extraction
//!
//! This crate recovers the Snowflake-style identifier embedded in a LinkedIn
//! post or comment URL and decodes the creation timestamp carried in its high
//! bits, rendering it in four representations at once.
//!
//! # Features
//!
//! - **Shape-aware extraction**: an ordered pattern library recognizes feed
//!   permalinks, `/posts/`, `/shares/`, `/pulse/`, and both comment URN forms,
//!   with a guarded 19-21-digit fallback tried last
//! - **Comment priority**: when a URL carries both a comment and a post
//!   identifier, the comment wins
//! - **Windowed decoding**: the 22-bit shift output is validated against a
//!   platform-inception floor and a generous future allowance
//! - **Multi-format output**: epoch seconds, ISO-8601, a long localized
//!   rendering, and a tiered relative phrase
//! - **Bounded memoization**: results, identifiers, and formatted output are
//!   cached with oldest-first eviction; nothing in the pipeline ever panics
//!   on a well-formed string
//!
//! # Quick Start
//!
//! ```
//! use linkstamp::{extract_timestamp_from_url, analyze_url, Classification};
//!
//! // Decode a post URL
//! let url = "https://www.linkedin.com/posts/johndoe_7223467890123456789_sample-post";
//! let result = extract_timestamp_from_url(url).unwrap();
//! assert_eq!(result.unix, 1722208950);
//! assert!(result.iso.starts_with("2024-07-28"));
//!
//! // Pre-flight classification for better error messages
//! let analysis = analyze_url("https://www.linkedin.com/in/johndoe/");
//! assert!(!analysis.is_valid);
//! assert_eq!(analysis.kind, Classification::Profile);
//!
//! // Lower-level building blocks compose the same way
//! let id = linkstamp::extract_post_id(url).unwrap();
//! let millis = linkstamp::decode_timestamp(&id).unwrap();
//! assert_eq!(millis, 1722208950548);
//! ```
//!
//! # Identifier Layout
//!
//! | Bits    | Content                                  |
//! |---------|------------------------------------------|
//! | high 41 | creation time, milliseconds since epoch  |
//! | low 22  | intra-millisecond sequence and shard data |
//!
//! Decoding shifts right by 22 and discards the low bits.
//!
//! # Error Handling
//!
//! Absence is the normal failure mode: every extraction and decoding function
//! returns `Option`, and no well-formed string input can cause a panic. The
//! `Result`-based steps underneath ([`crate::core::decoder::decode_timestamp_ms_at`]
//! and friends) report [`LinkstampError`] values for callers that need the
//! rejection reason.

// Re-export the engine surface
pub use engine::{
    analyze_url, clear_caches, decode_timestamp, demo_result, extract_comment_id,
    extract_post_id, extract_timestamp_from_url, format_timestamp, Engine, EngineConfig,
};

// Re-export public types
pub use cache::BoundedCache;
pub use error::LinkstampError;
pub use types::{Classification, TimestampResult, UrlAnalysis};

// Re-export core building blocks for composition and testing
pub use core::classifier::is_linkedin_url;
pub use core::decoder::{INCEPTION_FLOOR_MS, FUTURE_SKEW_MS, TIMESTAMP_SHIFT};
pub use core::formatter::{format_timestamp_at, SECONDS_MS_PIVOT};
pub use core::patterns::{PatternLibrary, ShapeMatcher, UrlShape, PATTERNS};

// Module declarations
pub mod cache;
pub mod core;
pub mod engine;
pub mod error;
pub mod types;
