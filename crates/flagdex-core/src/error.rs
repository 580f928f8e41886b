// crates/flagdex-core/src/error.rs
use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FlagdexError>;

/// Everything that can go wrong while loading the country list.
///
/// The store treats all variants identically: log, fall back, move on.
/// The granularity exists for diagnostics, not for recovery branching.
#[derive(Debug, Error)]
pub enum FlagdexError {
    /// Network / transport failure before a response arrived.
    #[cfg(feature = "fetch")]
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed, but no country list could be located in it.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}
