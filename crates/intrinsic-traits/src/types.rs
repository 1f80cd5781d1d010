//! Value types shared across the valuation engine.
//!
//! Everything here is a plain immutable snapshot. The engine never holds on to
//! these between calls; callers own every value that flows in or out.

use crate::{IntrinsicError, Result};
use serde::{Deserialize, Serialize};

/// Normalized per-ticker fundamentals, all monetary fields in USD.
///
/// Produced by the normalizer from provider data or written directly from
/// manual edits; the engine does not distinguish the two.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Free cash flow per share, USD.
    pub fcf_per_share: f64,
    /// Shares outstanding, in billions. Never negative.
    pub shares_outstanding_b: f64,
    /// Total cash, billions USD.
    pub cash_b: f64,
    /// Total debt, billions USD.
    pub debt_b: f64,
    /// Trailing P/E. `0.0` means unknown.
    pub current_pe: f64,
    /// Multi-year average P/E. `0.0` means unknown.
    pub historical_pe: f64,
    /// 52-week high, USD.
    pub year_high: f64,
    /// Market beta, when the provider reports one.
    pub beta: Option<f64>,
    /// Trailing compound annual growth of FCF, in percent.
    pub fcf_cagr_percent: Option<f64>,
}

impl Fundamentals {
    /// Net cash per share, `(cash - debt) / shares`, or `0.0` without shares.
    #[must_use]
    pub fn net_cash_per_share(&self) -> f64 {
        if self.shares_outstanding_b > 0.0 {
            (self.cash_b - self.debt_b) / self.shares_outstanding_b
        } else {
            0.0
        }
    }
}

/// Terminal-value policy applied at the end of the explicit horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalMethod {
    /// Perpetual growth at `terminal_growth_percent`.
    #[default]
    GordonGrowth,
    /// Sale at `exit_multiple` times year-5 FCF.
    MarketMultiple,
}

impl TerminalMethod {
    /// Short identifier used in reports and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GordonGrowth => "gordon",
            Self::MarketMultiple => "multiple",
        }
    }
}

impl std::str::FromStr for TerminalMethod {
    type Err = IntrinsicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gordon" | "gordon-growth" | "perpetual" => Ok(Self::GordonGrowth),
            "multiple" | "exit-multiple" | "market-multiple" => Ok(Self::MarketMultiple),
            other => Err(IntrinsicError::InvalidData(format!(
                "Unknown terminal method: {other}"
            ))),
        }
    }
}

/// User-controlled valuation assumptions. All rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Annual FCF growth over the five-year explicit horizon.
    pub growth_rate_percent: f64,
    /// Discount rate applied to every projected cash flow.
    pub discount_rate_percent: f64,
    /// Perpetual growth, used by [`TerminalMethod::GordonGrowth`] only.
    pub terminal_growth_percent: f64,
    /// Exit multiple, used by [`TerminalMethod::MarketMultiple`] only.
    pub exit_multiple: f64,
    /// Terminal-value policy.
    pub method: TerminalMethod,
    /// Discount applied to intrinsic value for the buy target, in `[0, 60]`.
    pub margin_of_safety_percent: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            growth_rate_percent: 10.0,
            discount_rate_percent: 9.0,
            terminal_growth_percent: 2.5,
            exit_multiple: 15.0,
            method: TerminalMethod::GordonGrowth,
            margin_of_safety_percent: 10.0,
        }
    }
}

impl Assumptions {
    /// Copy with a different growth rate.
    #[must_use]
    pub fn with_growth(&self, growth_rate_percent: f64) -> Self {
        Self {
            growth_rate_percent,
            ..self.clone()
        }
    }

    /// Copy with a different discount rate.
    #[must_use]
    pub fn with_discount(&self, discount_rate_percent: f64) -> Self {
        Self {
            discount_rate_percent,
            ..self.clone()
        }
    }

    /// Checks the terminal-value precondition.
    ///
    /// # Errors
    ///
    /// Returns [`IntrinsicError::Configuration`] when the Gordon-Growth method
    /// is selected and the discount rate does not exceed terminal growth.
    pub fn check_terminal(&self) -> Result<()> {
        if self.method == TerminalMethod::GordonGrowth
            && self.discount_rate_percent <= self.terminal_growth_percent
        {
            return Err(IntrinsicError::Configuration(format!(
                "discount rate {}% must exceed terminal growth {}% under Gordon growth",
                self.discount_rate_percent, self.terminal_growth_percent
            )));
        }
        Ok(())
    }
}

/// A positive, finite market price in USD.
///
/// A zero or missing price means "unknown" and cannot be represented, so every
/// price-relative computation that takes a `MarketPrice` is disabled rather
/// than fed a misleading zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MarketPrice(f64);

impl MarketPrice {
    /// Wraps `value` if it is a usable price.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// The price in USD.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for MarketPrice {
    type Error = IntrinsicError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
            .ok_or_else(|| IntrinsicError::MissingPrice(format!("{value} is not a usable price")))
    }
}

impl From<MarketPrice> for f64 {
    fn from(price: MarketPrice) -> Self {
        price.0
    }
}

/// One point of the five-year value projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Year offset, `0..=5`. Year 0 is the current intrinsic value.
    pub year: u32,
    /// Projected value per share.
    pub value: f64,
}

/// One cell of the growth × discount sensitivity grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityCell {
    /// Growth rate used for this cell, percent.
    pub growth_rate: f64,
    /// Discount rate used for this cell, percent.
    pub discount_rate: f64,
    /// Intrinsic value, or `None` when this discount rate breaks the
    /// Gordon-Growth precondition.
    pub value: Option<f64>,
}

impl SensitivityCell {
    /// Whether this cell values the stock strictly above `price`.
    #[must_use]
    pub fn is_favorable(&self, price: MarketPrice) -> bool {
        self.value.is_some_and(|v| v > price.value())
    }
}
