//! Error types for the parsing boundaries of the listing engine
//!
//! The engine itself is total: out-of-range pages clamp, storage failures are
//! swallowed, unmatched filters yield empty pages. Errors only show up where
//! outside text is turned into typed values.

use thiserror::Error;

/// Unknown sort option string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort mode '{0}' (expected default, asc or desc)")]
pub struct ParseSortModeError(pub String);

/// Unknown view mode string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode '{0}' (expected grid or list)")]
pub struct ParseViewModeError(pub String);

/// Failure decoding a product collection
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid product JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("product {id} has a negative price ({price})")]
    NegativePrice { id: u32, price: f64 },

    #[error("product {id} has a rating outside 0-5 ({rate})")]
    RatingOutOfRange { id: u32, rate: f64 },
}

/// Failure loading a listing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listing config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("page_size must be at least 1")]
    ZeroPageSize,

    #[error("search_param must not be empty")]
    EmptySearchParam,
}

/// Failure reported by a preference backend
///
/// Never reaches callers of [`crate::prefs::PreferenceStore::get`] or
/// [`crate::prefs::PreferenceStore::set`]; those log and drop it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    #[error("preference storage unavailable")]
    Unavailable,

    #[error("preference storage failed: {0}")]
    Backend(String),
}
