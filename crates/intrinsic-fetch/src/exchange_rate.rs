//! ExchangeRate-API client.

use crate::{Result, error::FetchError, types::PairConversion};
use async_trait::async_trait;
use intrinsic_traits::FxRateProvider;
use reqwest::Client;
use std::env;

/// Base URL for the ExchangeRate-API v6 endpoints.
const EXCHANGE_RATE_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Environment variable holding the ExchangeRate-API key.
pub const EXCHANGERATE_API_KEY: &str = "EXCHANGERATE_API_KEY";

/// ExchangeRate-API client, used as the normalizer's FX collaborator.
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    client: Client,
    api_key: String,
}

impl ExchangeRateClient {
    /// Create a new client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new client from the `EXCHANGERATE_API_KEY` environment
    /// variable, loading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or empty.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var(EXCHANGERATE_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FetchError::MissingApiKey(EXCHANGERATE_API_KEY))?;

        Ok(Self::new(api_key))
    }

    fn pair_url(&self, from: &str, to: &str) -> String {
        format!(
            "{EXCHANGE_RATE_BASE_URL}/{}/pair/{}/{}",
            self.api_key,
            from.to_ascii_uppercase(),
            to.to_ascii_uppercase()
        )
    }

    /// Units of `to` bought by one unit of `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports an error.
    pub async fn pair_rate(&self, from: &str, to: &str) -> Result<f64> {
        let response = self.client.get(self.pair_url(from, to)).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimitExceeded);
        }

        let body: PairConversion = response.json().await?;
        if body.result != "success" {
            let reason = body.error_type.unwrap_or(body.result);
            return Err(FetchError::Api(format!("{from}->{to}: {reason}")));
        }

        body.conversion_rate
            .ok_or_else(|| FetchError::Api(format!("{from}->{to}: missing conversion_rate")))
    }
}

#[async_trait]
impl FxRateProvider for ExchangeRateClient {
    async fn rate_to_usd(&self, currency: &str) -> intrinsic_traits::Result<f64> {
        let rate = self.pair_rate(currency, "USD").await?;
        tracing::debug!(currency, rate, "Resolved FX rate");
        Ok(rate)
    }
}
