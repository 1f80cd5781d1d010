//! Data loading for the Intrinsic CLI.

use intrinsic_fetch::{ExchangeRateClient, FinnhubClient, clean_ticker};
use intrinsic_normalize::Normalizer;
use intrinsic_traits::{
    Fundamentals, FxRateProvider, IntrinsicError, MarketPrice, RawFundamentals,
    usd_rate_or_default,
};

/// Fundamentals and quote for one ticker, ready for valuation.
#[derive(Debug, Clone)]
pub(crate) struct Loaded {
    /// Cleaned ticker.
    pub(crate) symbol: String,
    /// Company name, if the profile was available.
    pub(crate) name: Option<String>,
    /// Normalized USD fundamentals.
    pub(crate) fundamentals: Fundamentals,
    /// Market price.
    pub(crate) price: Option<MarketPrice>,
    /// Percent change against the previous close.
    pub(crate) daily_change_percent: f64,
}

impl Loaded {
    /// `"AAPL (Apple Inc)"`, or just the symbol.
    pub(crate) fn label(&self) -> String {
        self.name
            .as_ref()
            .map_or_else(|| self.symbol.clone(), |name| format!("{} ({name})", self.symbol))
    }
}

/// Resolve the USD rate for the reporting currency of `raw`.
///
/// Without an FX collaborator, foreign figures are taken at parity.
pub(crate) async fn resolve_rate(fx: Option<&dyn FxRateProvider>, raw: &RawFundamentals) -> f64 {
    if !raw.is_foreign() {
        return 1.0;
    }
    match fx {
        Some(provider) => usd_rate_or_default(provider, raw.currency_or_usd()).await,
        None => {
            tracing::warn!(
                currency = raw.currency_or_usd(),
                "No FX provider configured, assuming parity with USD"
            );
            1.0
        }
    }
}

/// Convert the listing-currency quote of a foreign profile into USD so it
/// shares units with the converted 52-week high and cash figures.
pub(crate) fn quote_in_usd(mut raw: RawFundamentals, rate: f64) -> RawFundamentals {
    if raw.is_foreign() {
        raw.price_usd = raw.price_usd.map(|p| p * rate);
    }
    raw
}

/// Fetch, convert and normalize fundamentals for `input`.
pub(crate) async fn load_fundamentals(input: &str) -> Result<Loaded, IntrinsicError> {
    let symbol = clean_ticker(input);
    if symbol.is_empty() {
        return Err(IntrinsicError::InvalidData("empty ticker".to_string()));
    }

    let client = FinnhubClient::from_env()?;
    let data = client.fundamental_data(&symbol).await?;
    let raw = data.to_raw();

    let fx = ExchangeRateClient::from_env()
        .inspect_err(|e| tracing::debug!(error = %e, "ExchangeRate-API unavailable"))
        .ok();
    let rate = resolve_rate(fx.as_ref().map(|c| c as &dyn FxRateProvider), &raw).await;
    let raw = quote_in_usd(raw, rate);

    let fundamentals = Normalizer::default().normalize(&raw, rate)?;

    Ok(Loaded {
        name: data.name().map(str::to_string),
        price: raw.price_usd.and_then(MarketPrice::new),
        daily_change_percent: data.quote.daily_change_percent(),
        fundamentals,
        symbol,
    })
}
