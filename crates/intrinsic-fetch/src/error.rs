//! Error types for the market-data clients.

use intrinsic_traits::IntrinsicError;
use thiserror::Error;

/// Errors that can occur when talking to Finnhub or ExchangeRate-API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Missing API key.
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),
}

impl From<FetchError> for IntrinsicError {
    fn from(e: FetchError) -> Self {
        Self::DataFetch(e.to_string())
    }
}
