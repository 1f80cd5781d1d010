//! Currency conversion collaborator.
//!
//! The normalizer itself is synchronous and receives an already-resolved
//! rate. This module defines the seam used to obtain that rate and the
//! fallback policy: any failure is treated as "same as USD".

use crate::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Source of conversion rates into USD.
///
/// Implementations must be stateless from the caller's point of view; each
/// call is an independent lookup.
#[async_trait]
pub trait FxRateProvider: Send + Sync {
    /// Returns how many USD one unit of `currency` buys.
    ///
    /// # Errors
    ///
    /// Returns an error when the rate cannot be obtained (network failure,
    /// missing credentials, unsupported currency).
    async fn rate_to_usd(&self, currency: &str) -> Result<f64>;
}

/// Resolves the rate for `currency`, short-circuiting USD and degrading any
/// failure to `1.0`.
pub async fn usd_rate_or_default<P>(provider: &P, currency: &str) -> f64
where
    P: FxRateProvider + ?Sized,
{
    if currency.eq_ignore_ascii_case("USD") {
        return 1.0;
    }

    match provider.rate_to_usd(currency).await {
        Ok(rate) if rate.is_finite() && rate > 0.0 => rate,
        Ok(rate) => {
            tracing::warn!(currency, rate, "Unusable FX rate, assuming parity with USD");
            1.0
        }
        Err(e) => {
            tracing::warn!(currency, error = %e, "FX lookup failed, assuming parity with USD");
            1.0
        }
    }
}

/// Fixed table of rates, for offline use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    rates: HashMap<String, f64>,
}

impl StaticRates {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the USD rate for `currency`.
    #[must_use]
    pub fn with_rate(mut self, currency: &str, rate: f64) -> Self {
        self.rates.insert(currency.to_ascii_uppercase(), rate);
        self
    }
}

#[async_trait]
impl FxRateProvider for StaticRates {
    async fn rate_to_usd(&self, currency: &str) -> Result<f64> {
        self.rates
            .get(&currency.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| crate::IntrinsicError::DataFetch(format!("No rate for {currency}")))
    }
}
