//! The extraction engine: pipeline orchestration and memoization.
//!
//! An [`Engine`] owns every cache, so tests construct isolated instances
//! instead of sharing state. The free functions at the bottom of this module
//! are the convenience surface most callers use; they delegate to one
//! process-wide engine behind a mutex, since eviction is a read-modify-write
//! sequence that is not safe under unsynchronized concurrent mutation.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, warn};

use crate::cache::BoundedCache;
use crate::core::classifier;
use crate::core::decoder;
use crate::core::extractor;
use crate::core::formatter;
use crate::types::{TimestampResult, UrlAnalysis};

/// Cache sizing for an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Raw URL -> result entries. Overflow evicts the oldest 20% in one pass.
    pub result_cache_capacity: usize,
    /// Normalized timestamp -> formatted output entries.
    pub format_cache_capacity: usize,
    /// Raw URL -> identifier entries, one cache each for post and comment ids.
    pub id_cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_cache_capacity: 200,
            format_cache_capacity: 100,
            id_cache_capacity: 200,
        }
    }
}

/// The identifier-extraction and timestamp-decoding engine.
///
/// Every operation is synchronous and runs to completion; the only state an
/// engine carries is its memoization caches and a pattern-scan counter.
#[derive(Debug)]
pub struct Engine {
    results: BoundedCache<String, Option<TimestampResult>>,
    formats: BoundedCache<i64, TimestampResult>,
    post_ids: BoundedCache<String, Option<String>>,
    comment_ids: BoundedCache<String, Option<String>>,
    pattern_scans: u64,
}

impl Engine {
    /// Create an engine with default cache sizing.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with explicit cache sizing.
    pub fn with_config(config: EngineConfig) -> Self {
        let result_batch = (config.result_cache_capacity / 5).max(1);
        Self {
            results: BoundedCache::with_batch_eviction(
                config.result_cache_capacity,
                result_batch,
            ),
            formats: BoundedCache::new(config.format_cache_capacity),
            post_ids: BoundedCache::new(config.id_cache_capacity),
            comment_ids: BoundedCache::new(config.id_cache_capacity),
            pattern_scans: 0,
        }
    }

    /// Extract a post-style identifier from a URL, memoized by raw URL.
    pub fn extract_post_id(&mut self, url: &str) -> Option<String> {
        if let Some(cached) = self.post_ids.get(url) {
            return cached.clone();
        }
        self.pattern_scans += 1;
        let found = extractor::find_post_id(url);
        self.post_ids.insert(url.to_string(), found.clone());
        found
    }

    /// Extract a comment identifier from a URL, memoized by raw URL.
    pub fn extract_comment_id(&mut self, url: &str) -> Option<String> {
        if let Some(cached) = self.comment_ids.get(url) {
            return cached.clone();
        }
        self.pattern_scans += 1;
        let found = extractor::find_comment_id(url);
        self.comment_ids.insert(url.to_string(), found.clone());
        found
    }

    /// Decode an identifier into milliseconds since the Unix epoch.
    pub fn decode_timestamp(&self, id: &str) -> Option<i64> {
        decoder::decode_timestamp(id)
    }

    /// Render a timestamp, memoized by the input value.
    ///
    /// The cached entry includes the relative phrase as computed on first
    /// render; a hit returns output identical to that first computation.
    pub fn format_timestamp(&mut self, value: i64) -> Option<TimestampResult> {
        if let Some(cached) = self.formats.get(&value) {
            return Some(cached.clone());
        }
        let rendered = formatter::format_timestamp(value)?;
        self.formats.insert(value, rendered.clone());
        Some(rendered)
    }

    /// Run the full pipeline: identifier extraction, decoding, formatting.
    ///
    /// Results (including misses) are memoized by raw URL; a hit
    /// short-circuits every later stage.
    pub fn extract_timestamp_from_url(&mut self, url: &str) -> Option<TimestampResult> {
        if let Some(hit) = self.results.get(url) {
            return hit.clone();
        }

        if !classifier::is_linkedin_url(url) {
            warn!(url, "not a LinkedIn URL");
            self.results.insert(url.to_string(), None);
            return None;
        }

        // Comment identifiers take priority: a comment URL's primary subject
        // is the comment, even though the parent post id is also present.
        let id = self
            .extract_comment_id(url)
            .or_else(|| self.extract_post_id(url));

        let Some(id) = id else {
            debug!(url, "no post or comment identifier found");
            self.results.insert(url.to_string(), None);
            return None;
        };

        let Some(millis) = self.decode_timestamp(&id) else {
            self.results.insert(url.to_string(), None);
            return None;
        };

        let result = self.format_timestamp(millis);
        self.results.insert(url.to_string(), result.clone());
        result
    }

    /// Classify a URL by shape. Stateless; bypasses every cache.
    pub fn analyze_url(&self, url: &str) -> UrlAnalysis {
        classifier::analyze_url(url)
    }

    /// Reset all memoization state.
    pub fn clear_caches(&mut self) {
        self.results.clear();
        self.formats.clear();
        self.post_ids.clear();
        self.comment_ids.clear();
    }

    /// Number of pattern-library scans performed since construction.
    ///
    /// Cache hits do not scan, so this counter makes memoization observable.
    pub fn pattern_scans(&self) -> u64 {
        self.pattern_scans
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// A sample result for "now", for hosts rendering a demonstration card.
pub fn demo_result() -> TimestampResult {
    let now = Utc::now();
    TimestampResult {
        unix: now.timestamp(),
        iso: now.format(formatter::ISO_FORMAT).to_string(),
        local: now.format(formatter::LOCAL_FORMAT).to_string(),
        relative: "Just now (Demo)".to_string(),
    }
}

static ENGINE: LazyLock<Mutex<Engine>> = LazyLock::new(|| Mutex::new(Engine::new()));

fn shared_engine() -> MutexGuard<'static, Engine> {
    ENGINE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Extract and render the timestamp embedded in a LinkedIn URL.
pub fn extract_timestamp_from_url(url: &str) -> Option<TimestampResult> {
    shared_engine().extract_timestamp_from_url(url)
}

/// Classify a URL by shape, for precise error messages.
pub fn analyze_url(url: &str) -> UrlAnalysis {
    classifier::analyze_url(url)
}

/// Extract a post-style identifier from a URL.
pub fn extract_post_id(url: &str) -> Option<String> {
    shared_engine().extract_post_id(url)
}

/// Extract a comment identifier from a URL.
pub fn extract_comment_id(url: &str) -> Option<String> {
    shared_engine().extract_comment_id(url)
}

/// Decode an identifier into milliseconds since the Unix epoch.
pub fn decode_timestamp(id: &str) -> Option<i64> {
    decoder::decode_timestamp(id)
}

/// Render a timestamp in the four supported formats.
pub fn format_timestamp(value: i64) -> Option<TimestampResult> {
    shared_engine().format_timestamp(value)
}

/// Reset the process-wide engine's memoization state.
pub fn clear_caches() {
    shared_engine().clear_caches();
}
