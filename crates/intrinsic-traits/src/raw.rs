//! Raw provider input consumed by the normalizer.
//!
//! Data-fetch collaborators must map every absent upstream field to `None`,
//! never to zero, so that the normalizer's fallback chains can run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single annual observation of a reported series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualObservation {
    /// Fiscal period end.
    pub period: NaiveDate,
    /// Reported value.
    pub value: f64,
}

impl AnnualObservation {
    /// Creates an observation.
    #[must_use]
    pub const fn new(period: NaiveDate, value: f64) -> Self {
        Self { period, value }
    }
}

/// Optional, possibly foreign-currency fundamentals as reported upstream.
///
/// Absolute amounts (`total_*`, `*_per_share`, `year_high`) are in the
/// reporting currency and in the same scale as `shares_outstanding_b`
/// (billions). `price_usd` is always USD. Ratios are unit-free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFundamentals {
    /// ISO currency code of the financial statements. `None` is read as USD.
    pub currency: Option<String>,
    /// Live market price in USD.
    pub price_usd: Option<f64>,
    /// Total free cash flow, billions.
    pub total_fcf: Option<f64>,
    /// Price-to-free-cash-flow ratio.
    pub price_to_fcf: Option<f64>,
    /// Total cash, billions.
    pub total_cash: Option<f64>,
    /// Cash per share.
    pub cash_per_share: Option<f64>,
    /// Total debt, billions.
    pub total_debt: Option<f64>,
    /// Debt-to-equity ratio.
    pub debt_to_equity: Option<f64>,
    /// Book value per share.
    pub book_value_per_share: Option<f64>,
    /// Shares outstanding, billions.
    pub shares_outstanding_b: Option<f64>,
    /// 52-week high in the reporting currency.
    pub year_high: Option<f64>,
    /// Trailing P/E.
    pub trailing_pe: Option<f64>,
    /// Market beta.
    pub beta: Option<f64>,
    /// Annual P/E history, any order.
    pub pe_series: Option<Vec<AnnualObservation>>,
    /// Annual FCF history, any order.
    pub fcf_series: Option<Vec<AnnualObservation>>,
}

impl RawFundamentals {
    /// Reporting currency, defaulting to USD.
    #[must_use]
    pub fn currency_or_usd(&self) -> &str {
        self.currency.as_deref().unwrap_or("USD")
    }

    /// Whether statements are reported in something other than USD.
    #[must_use]
    pub fn is_foreign(&self) -> bool {
        !self.currency_or_usd().eq_ignore_ascii_case("USD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_defaults_to_usd() {
        let raw = RawFundamentals::default();
        assert_eq!(raw.currency_or_usd(), "USD");
        assert!(!raw.is_foreign());
    }

    #[test]
    fn test_foreign_currency() {
        let raw = RawFundamentals {
            currency: Some("EUR".to_string()),
            ..Default::default()
        };
        assert!(raw.is_foreign());

        let lower = RawFundamentals {
            currency: Some("usd".to_string()),
            ..Default::default()
        };
        assert!(!lower.is_foreign());
    }
}
