//! Free cash flow yield.

use serde::{Deserialize, Serialize};

/// Verdict attached to an FCF yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FcfYieldVerdict {
    /// Yield below 3%
    Expensive,
    /// Yield in `[3%, 7%)`
    Fair,
    /// Yield at or above 7%
    Attractive,
}

impl FcfYieldVerdict {
    /// Get a human-readable description of the verdict.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Expensive => "Little cash returned per dollar invested",
            Self::Fair => "Cash generation in line with the price",
            Self::Attractive => "Strong cash generation relative to price",
        }
    }
}

/// FCF per share relative to price, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FcfYield {
    /// Yield in percent, `0.0` when the price is not positive.
    pub percent: f64,
}

impl FcfYield {
    /// Compute `fcf_per_share / price * 100`.
    #[must_use]
    pub fn calculate(fcf_per_share: f64, price: f64) -> Self {
        let percent = if price > 0.0 {
            fcf_per_share / price * 100.0
        } else {
            0.0
        };
        Self { percent }
    }

    /// Classify the yield.
    #[must_use]
    pub fn verdict(&self) -> FcfYieldVerdict {
        if self.percent < 3.0 {
            FcfYieldVerdict::Expensive
        } else if self.percent < 7.0 {
            FcfYieldVerdict::Fair
        } else {
            FcfYieldVerdict::Attractive
        }
    }
}
