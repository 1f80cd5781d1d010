//! CAPM-implied discount rate suggestion.

use serde::{Deserialize, Serialize};

/// Configuration for the CAPM estimate. Both rates are percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapmConfig {
    /// Risk-free rate (default: 4.2)
    pub risk_free_rate: f64,

    /// Equity risk premium (default: 5.0)
    pub equity_risk_premium: f64,
}

impl Default for CapmConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 4.2,
            equity_risk_premium: 5.0,
        }
    }
}

impl CapmConfig {
    /// Suggested discount rate, `risk_free + beta * premium`.
    ///
    /// Only offered when beta is known. The caller decides whether to apply
    /// it to the assumptions; nothing here changes them.
    #[must_use]
    pub fn suggested_discount_rate(&self, beta: Option<f64>) -> Option<f64> {
        beta.filter(|b| b.is_finite())
            .map(|b| self.risk_free_rate + b * self.equity_risk_premium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = CapmConfig::default();
        assert_relative_eq!(config.risk_free_rate, 4.2);
        assert_relative_eq!(config.equity_risk_premium, 5.0);
    }

    #[test]
    fn test_suggestion() {
        let config = CapmConfig::default();
        assert_relative_eq!(config.suggested_discount_rate(Some(1.0)).unwrap(), 9.2);
        assert_relative_eq!(config.suggested_discount_rate(Some(1.2)).unwrap(), 10.2);
        assert_relative_eq!(config.suggested_discount_rate(Some(0.0)).unwrap(), 4.2);
    }

    #[test]
    fn test_no_beta_no_suggestion() {
        assert!(CapmConfig::default().suggested_discount_rate(None).is_none());
        assert!(
            CapmConfig::default()
                .suggested_discount_rate(Some(f64::NAN))
                .is_none()
        );
    }
}
