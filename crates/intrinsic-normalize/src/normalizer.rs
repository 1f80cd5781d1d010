//! Conversion of raw provider data into [`Fundamentals`].

use crate::{
    derivation::{CASH, DEBT, DerivationInput, FCF_PER_SHARE, first_match},
    history::{fcf_cagr_percent, historical_pe},
};
use intrinsic_traits::{Fundamentals, IntrinsicError, MarketPrice, RawFundamentals, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the fundamentals normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Number of most recent positive annual P/Es averaged (default: 5)
    pub pe_window: usize,

    /// Longest CAGR lookback in years (default: 5)
    pub cagr_max_lookback: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            pe_window: 5,
            cagr_max_lookback: 5,
        }
    }
}

/// Reconciles sparse, possibly foreign-currency data into USD fundamentals.
///
/// Missing optional data never fails: every field has a fallback chain that
/// ends in `0.0` (or `None` for beta and CAGR). The only hard requirement is a
/// usable USD price, without which the whole fetch should be treated as
/// failed.
///
/// # Example
///
/// ```
/// use intrinsic_normalize::Normalizer;
/// use intrinsic_traits::RawFundamentals;
///
/// let raw = RawFundamentals {
///     currency: Some("EUR".to_string()),
///     price_usd: Some(50.0),
///     total_cash: Some(100.0),
///     ..Default::default()
/// };
/// let fundamentals = Normalizer::default().normalize(&raw, 0.92).unwrap();
/// assert!((fundamentals.cash_b - 92.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with the given configuration.
    #[must_use]
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize `raw` using `rate` to convert reporting-currency absolutes
    /// into USD. Callers pass `1.0` for USD filers.
    ///
    /// # Errors
    ///
    /// Returns [`IntrinsicError::MissingPrice`] when `price_usd` is absent,
    /// zero, negative or not finite.
    pub fn normalize(&self, raw: &RawFundamentals, rate: f64) -> Result<Fundamentals> {
        let price = raw
            .price_usd
            .and_then(MarketPrice::new)
            .ok_or_else(|| {
                IntrinsicError::MissingPrice(format!("price_usd = {:?}", raw.price_usd))
            })?
            .value();

        let rate = if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            tracing::warn!(rate, "Unusable conversion rate, assuming USD parity");
            1.0
        };

        let input = DerivationInput {
            raw,
            rate,
            price_usd: price,
        };

        let fcf_per_share = first_match("fcf_per_share", FCF_PER_SHARE, &input).value;
        let cash_b = first_match("cash", CASH, &input).value;
        let debt_b = first_match("debt", DEBT, &input).value;

        let year_high = raw
            .year_high
            .filter(|h| h.is_finite() && *h > 0.0)
            .map_or(price, |h| h * rate)
            .max(price);

        let historical_pe = historical_pe(
            raw.pe_series.as_deref(),
            raw.trailing_pe,
            self.config.pe_window,
        );

        let fcf_cagr_percent = raw
            .fcf_series
            .as_deref()
            .and_then(|s| fcf_cagr_percent(s, self.config.cagr_max_lookback));

        let fundamentals = Fundamentals {
            fcf_per_share,
            shares_outstanding_b: raw
                .shares_outstanding_b
                .filter(|s| s.is_finite())
                .unwrap_or(0.0)
                .max(0.0),
            cash_b,
            debt_b,
            current_pe: raw.trailing_pe.filter(|pe| pe.is_finite()).unwrap_or(0.0),
            historical_pe,
            year_high,
            beta: raw.beta.filter(|b| b.is_finite()),
            fcf_cagr_percent,
        };

        tracing::debug!(
            currency = raw.currency_or_usd(),
            rate,
            fcf_per_share = fundamentals.fcf_per_share,
            "Normalized fundamentals"
        );

        Ok(fundamentals)
    }
}
