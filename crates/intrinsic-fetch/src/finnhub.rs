//! Finnhub API client implementation.

use crate::{
    Result,
    error::FetchError,
    types::{BasicFinancials, CompanyProfile, FundamentalData, Quote},
};
use reqwest::Client;
use std::env;

/// Base URL for the Finnhub v1 API.
const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Environment variable holding the Finnhub key.
pub const FINNHUB_API_KEY: &str = "FINNHUB_API_KEY";

/// Finnhub API client.
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    client: Client,
    api_key: String,
}

impl FinnhubClient {
    /// Create a new Finnhub client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new Finnhub client from the `FINNHUB_API_KEY` environment
    /// variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or empty.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var(FINNHUB_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FetchError::MissingApiKey(FINNHUB_API_KEY))?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API token.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FINNHUB_BASE_URL}/{endpoint}&token={}", self.api_key)
        } else {
            format!("{FINNHUB_BASE_URL}/{endpoint}?token={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FetchError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        if text.starts_with("{\"error\"") {
            return Err(FetchError::Api(text));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Get the real-time quote for a symbol.
    ///
    /// Finnhub answers unknown symbols with an all-zero quote, which is
    /// reported as [`FetchError::SymbolNotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or no price is available.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let endpoint = format!("quote?symbol={symbol}");
        let quote: Quote = self.get(&endpoint).await?;
        if quote.price().is_none() {
            return Err(FetchError::SymbolNotFound(symbol.to_string()));
        }
        Ok(quote)
    }

    /// Get the company profile for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let endpoint = format!("stock/profile2?symbol={symbol}");
        self.get(&endpoint).await
    }

    /// Get all basic financials (point-in-time metrics and annual series).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn basic_financials(&self, symbol: &str) -> Result<BasicFinancials> {
        let endpoint = format!("stock/metric?symbol={symbol}&metric=all");
        self.get(&endpoint).await
    }

    /// Get everything needed to value a symbol.
    ///
    /// The three endpoints are queried in parallel. The quote is mandatory;
    /// profile and financials degrade to `None` with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote cannot be fetched.
    pub async fn fundamental_data(&self, symbol: &str) -> Result<FundamentalData> {
        let (quote, profile, financials) = tokio::join!(
            self.quote(symbol),
            self.profile(symbol),
            self.basic_financials(symbol),
        );

        let quote = quote?;
        let profile = profile
            .inspect_err(|e| tracing::warn!(symbol, error = %e, "Profile unavailable"))
            .ok();
        let financials = financials
            .inspect_err(|e| tracing::warn!(symbol, error = %e, "Basic financials unavailable"))
            .ok();

        tracing::debug!(
            symbol,
            has_profile = profile.is_some(),
            has_financials = financials.is_some(),
            "Fetched fundamentals"
        );

        Ok(FundamentalData {
            symbol: symbol.to_string(),
            quote,
            profile,
            financials,
        })
    }
}
