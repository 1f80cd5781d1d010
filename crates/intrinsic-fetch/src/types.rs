//! Data types for Finnhub and ExchangeRate-API responses.

use chrono::NaiveDate;
use intrinsic_traits::{AnnualObservation, RawFundamentals};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Real-time quote from Finnhub.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    /// Current price.
    #[serde(rename = "c", default)]
    pub current: Option<f64>,
    /// Change in price.
    #[serde(rename = "d", default)]
    pub change: Option<f64>,
    /// Percent change.
    #[serde(rename = "dp", default)]
    pub change_percent: Option<f64>,
    /// Day high.
    #[serde(rename = "h", default)]
    pub high: Option<f64>,
    /// Day low.
    #[serde(rename = "l", default)]
    pub low: Option<f64>,
    /// Open price.
    #[serde(rename = "o", default)]
    pub open: Option<f64>,
    /// Previous close.
    #[serde(rename = "pc", default)]
    pub previous_close: Option<f64>,
}

impl Quote {
    /// Live price, falling back to the previous close when the market feed
    /// reports nothing (weekends, halts).
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.current
            .filter(|p| *p > 0.0)
            .or_else(|| self.previous_close.filter(|p| *p > 0.0))
    }

    /// Percent change of [`Quote::price`] against the previous close, `0.0`
    /// when there is no usable reference.
    #[must_use]
    pub fn daily_change_percent(&self) -> f64 {
        let (Some(price), Some(reference)) = (self.price(), self.previous_close) else {
            return 0.0;
        };
        if reference == 0.0 {
            return 0.0;
        }
        (price - reference) / reference * 100.0
    }
}

/// Company profile from Finnhub (`stock/profile2`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Ticker symbol.
    #[serde(default)]
    pub ticker: Option<String>,
    /// Company name.
    #[serde(default)]
    pub name: Option<String>,
    /// Reporting currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Listing exchange.
    #[serde(default)]
    pub exchange: Option<String>,
    /// Shares outstanding, millions.
    #[serde(default)]
    pub share_outstanding: Option<f64>,
    /// Market capitalization, millions.
    #[serde(default)]
    pub market_capitalization: Option<f64>,
}

/// A point of a Finnhub metric series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Period end, `YYYY-MM-DD`.
    pub period: String,
    /// Value.
    pub v: f64,
}

/// Metric series grouped by frequency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Annual series keyed by metric name.
    #[serde(default)]
    pub annual: HashMap<String, Vec<SeriesPoint>>,
}

/// Basic financials from Finnhub (`stock/metric?metric=all`).
///
/// Metric values are kept loosely typed: Finnhub mixes numbers, dates and
/// nulls in the same object, and any of them may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicFinancials {
    /// Point-in-time metrics keyed by name.
    #[serde(default)]
    pub metric: HashMap<String, serde_json::Value>,
    /// Historical series.
    #[serde(default)]
    pub series: MetricSeries,
}

const YEAR_HIGH: &[&str] = &["52WeekHigh"];
const BETA: &[&str] = &["beta"];
const TRAILING_PE: &[&str] = &["peTTM", "peBasicExclExtraTTM", "peExclExtraTTM"];
const PRICE_TO_FCF: &[&str] = &["pfcfShareTTM", "pfcfShareAnnual"];
const CASH_PER_SHARE: &[&str] = &["cashPerSharePerShareQuarterly", "cashPerSharePerShareAnnual"];
const BOOK_VALUE_PER_SHARE: &[&str] = &["bookValuePerShareQuarterly", "bookValuePerShareAnnual"];
const DEBT_TO_EQUITY: &[&str] = &["totalDebt/totalEquityQuarterly", "totalDebt/totalEquityAnnual"];
const PE_SERIES: &[&str] = &["pe"];
const FCF_SERIES: &[&str] = &["fcfPerShareTTM", "freeCashFlowPerShare"];

impl BasicFinancials {
    /// First numeric metric among `keys`.
    #[must_use]
    pub fn number(&self, keys: &[&str]) -> Option<f64> {
        keys.iter()
            .find_map(|k| self.metric.get(*k).and_then(serde_json::Value::as_f64))
            .filter(|v| v.is_finite())
    }

    /// First annual series among `keys`, parsed into observations.
    #[must_use]
    pub fn annual_series(&self, keys: &[&str]) -> Option<Vec<AnnualObservation>> {
        let points = keys.iter().find_map(|k| self.series.annual.get(*k))?;
        let parsed: Vec<AnnualObservation> = points
            .iter()
            .filter_map(|p| {
                NaiveDate::parse_from_str(&p.period, "%Y-%m-%d")
                    .ok()
                    .map(|d| AnnualObservation::new(d, p.v))
            })
            .collect();
        (!parsed.is_empty()).then_some(parsed)
    }
}

/// Everything fetched for one symbol.
#[derive(Debug, Clone, Default)]
pub struct FundamentalData {
    /// Ticker symbol.
    pub symbol: String,
    /// Current quote.
    pub quote: Quote,
    /// Company profile, if available.
    pub profile: Option<CompanyProfile>,
    /// Basic financials, if available.
    pub financials: Option<BasicFinancials>,
}

impl FundamentalData {
    /// Company name, if reported.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.profile.as_ref()?.name.as_deref()
    }

    /// Map provider fields onto the normalizer's input.
    ///
    /// Basic financials expose per-share and ratio metrics only, so the
    /// totals stay `None` and the normalizer's fallbacks take over.
    ///
    /// `price_usd` carries the quote as listed, in the profile currency like
    /// the 52-week high; callers convert it for foreign profiles.
    #[must_use]
    pub fn to_raw(&self) -> RawFundamentals {
        let profile = self.profile.clone().unwrap_or_default();
        let financials = self.financials.clone().unwrap_or_default();

        RawFundamentals {
            currency: profile.currency,
            price_usd: self.quote.price(),
            total_fcf: None,
            price_to_fcf: financials.number(PRICE_TO_FCF),
            total_cash: None,
            cash_per_share: financials.number(CASH_PER_SHARE),
            total_debt: None,
            debt_to_equity: financials.number(DEBT_TO_EQUITY),
            book_value_per_share: financials.number(BOOK_VALUE_PER_SHARE),
            shares_outstanding_b: profile.share_outstanding.map(|m| m / 1_000.0),
            year_high: financials.number(YEAR_HIGH),
            trailing_pe: financials.number(TRAILING_PE),
            beta: financials.number(BETA),
            pe_series: financials.annual_series(PE_SERIES),
            fcf_series: financials.annual_series(FCF_SERIES),
        }
    }
}

/// Pair conversion response from ExchangeRate-API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairConversion {
    /// `"success"` or `"error"`.
    pub result: String,
    /// Units of the target currency per unit of the base currency.
    #[serde(default)]
    pub conversion_rate: Option<f64>,
    /// Error code when `result == "error"`.
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
}

/// Trim, strip quotes and uppercase a user-entered ticker.
#[must_use]
pub fn clean_ticker(input: &str) -> String {
    input.trim().replace('"', "").to_uppercase()
}
