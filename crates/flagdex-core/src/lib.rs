// crates/flagdex-core/src/lib.rs

pub mod config;
pub mod debounce;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch; // The outbound HTTP layer
pub mod normalize; // Record -> {name, flag, key}
pub mod search; // Query matching over the loaded list
pub mod seed; // Static fallback dataset
pub mod store; // State wiring (list + query + loading)
pub mod text;
pub mod view; // JSON-serializable card views

// Re-exports
pub use crate::config::{
    FallbackPolicy, FlagFallback, NormalizeOptions, ShapePolicy, StoreConfig, COUNTRIES_API_URL,
};
pub use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use crate::error::{FlagdexError, Result};
#[cfg(feature = "fetch")]
pub use crate::fetch::Fetcher;
pub use crate::normalize::{
    extract_flag_url, extract_key, extract_name, extract_records, CountryRecord,
    NormalizedCountry, UNKNOWN_NAME,
};
pub use crate::search::{filter_records, MatchPolicy};
pub use crate::seed::seed_records;
pub use crate::store::{CountryStore, LoadToken, StoreStats};
pub use crate::view::{CardView, HEADING, LOADING_TEXT, SEARCH_PLACEHOLDER};

/// Everything a typical consumer needs in one import.
pub mod prelude {
    #[cfg(feature = "fetch")]
    pub use crate::fetch::Fetcher;
    pub use crate::config::{FallbackPolicy, ShapePolicy, StoreConfig};
    pub use crate::error::{FlagdexError, Result};
    pub use crate::normalize::NormalizedCountry;
    pub use crate::search::MatchPolicy;
    pub use crate::store::CountryStore;
    pub use crate::view::CardView;
}
