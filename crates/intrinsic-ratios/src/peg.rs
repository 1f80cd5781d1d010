//! Price/earnings-to-growth ratio.

use serde::{Deserialize, Serialize};

/// Verdict attached to a PEG ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PegVerdict {
    /// PEG below 1.0
    Undervalued,
    /// PEG in `[1.0, 1.5)`
    Fair,
    /// PEG at or above 1.5
    Overvalued,
}

impl PegVerdict {
    /// Get a human-readable description of the verdict.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Undervalued => "Growth is cheap relative to earnings multiple",
            Self::Fair => "Earnings multiple roughly matches growth",
            Self::Overvalued => "Paying a premium for the expected growth",
        }
    }
}

/// PEG ratio: trailing P/E over the assumed growth rate in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peg {
    /// Ratio value, `0.0` when it cannot be computed.
    pub value: f64,
}

impl Peg {
    /// Compute the PEG ratio. Non-positive growth yields `0.0`.
    #[must_use]
    pub fn calculate(current_pe: f64, growth_rate_percent: f64) -> Self {
        let value = if growth_rate_percent > 0.0 {
            current_pe / growth_rate_percent
        } else {
            0.0
        };
        Self { value }
    }

    /// Classify the ratio.
    ///
    /// Returns `None` when the ratio is not positive: either growth was not
    /// positive or the P/E is unknown or negative, and neither reading is a
    /// bargain.
    #[must_use]
    pub fn verdict(&self) -> Option<PegVerdict> {
        if self.value.is_nan() || self.value <= 0.0 {
            return None;
        }
        Some(if self.value < 1.0 {
            PegVerdict::Undervalued
        } else if self.value < 1.5 {
            PegVerdict::Fair
        } else {
            PegVerdict::Overvalued
        })
    }
}
