// crates/flagdex-core/src/config.rs
use crate::debounce::DEFAULT_DEBOUNCE;
use crate::search::MatchPolicy;
use std::time::Duration;

/// The production countries feed. One unauthenticated GET, JSON body.
pub const COUNTRIES_API_URL: &str =
    "https://countries-search-data-prod-812920491762.asia-south1.run.app/countries";

/// Transparent 1x1 GIF used when a feed record has no flag image and the
/// consumer asked for a placeholder instead of an empty URL.
pub const PLACEHOLDER_FLAG: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// How much of the historical feed shapes to accept.
///
/// The feed has served both a bare JSON array and an object wrapping the
/// array. Lenient mode unwraps the known wrappers; strict mode insists on
/// a top-level array and reports anything else as a failed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    #[default]
    Lenient,
    Strict,
}

/// What the loaded list holds when the fetch never succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Render nothing until a successful load.
    Empty,
    /// Pre-populate with the bundled seed list; a successful load
    /// replaces it wholesale.
    #[default]
    Seeded,
}

/// Default flag URL for records where no candidate field yields one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagFallback {
    /// Empty string; the card renders without an image element.
    #[default]
    Empty,
    /// A fixed 1x1 placeholder image ([`PLACEHOLDER_FLAG`]).
    Placeholder,
}

/// Knobs for per-record field extraction.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub flag_fallback: FlagFallback,
    /// Rewrite `http://` flag URLs to `https://`.
    pub force_https: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            flag_fallback: FlagFallback::Empty,
            force_https: true,
        }
    }
}

/// Full configuration for a [`CountryStore`](crate::store::CountryStore).
///
/// The defaults are the most forgiving combination the feed's history
/// supports: lenient shape handling, substring matching, seeded fallback.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub endpoint: String,
    pub shape: ShapePolicy,
    pub matching: MatchPolicy,
    pub fallback: FallbackPolicy,
    pub normalize: NormalizeOptions,
    pub debounce: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: COUNTRIES_API_URL.to_string(),
            shape: ShapePolicy::default(),
            matching: MatchPolicy::default(),
            fallback: FallbackPolicy::default(),
            normalize: NormalizeOptions::default(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}
