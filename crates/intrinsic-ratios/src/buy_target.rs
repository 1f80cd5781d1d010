//! Margin-of-safety buy target.

use intrinsic_traits::{IntrinsicError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted margin of safety, percent.
pub const MAX_MARGIN_OF_SAFETY: f64 = 60.0;

/// The price at which a stock becomes a purchase candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuyTarget {
    /// Intrinsic value per share the target was derived from.
    pub intrinsic_value: f64,
    /// Discount applied, percent.
    pub margin_of_safety_percent: f64,
    /// `intrinsic_value * (1 - margin / 100)`.
    pub target_price: f64,
}

impl BuyTarget {
    /// Apply `margin_of_safety_percent` to `intrinsic_value`.
    ///
    /// # Errors
    ///
    /// Returns [`IntrinsicError::Configuration`] when the margin lies outside
    /// `[0, 60]`.
    pub fn new(intrinsic_value: f64, margin_of_safety_percent: f64) -> Result<Self> {
        if !(0.0..=MAX_MARGIN_OF_SAFETY).contains(&margin_of_safety_percent) {
            return Err(IntrinsicError::Configuration(format!(
                "margin of safety {margin_of_safety_percent}% outside [0, {MAX_MARGIN_OF_SAFETY}]"
            )));
        }

        Ok(Self {
            intrinsic_value,
            margin_of_safety_percent,
            target_price: intrinsic_value * (1.0 - margin_of_safety_percent / 100.0),
        })
    }

    /// Whether `price` is known and at or below the target.
    #[must_use]
    pub fn is_buyable(&self, price: f64) -> bool {
        price > 0.0 && price <= self.target_price
    }
}
