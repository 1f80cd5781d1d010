//! Forward discounted cash flow calculator.
//!
//! A fixed five-year explicit horizon followed by a terminal value, plus net
//! cash per share added undiscounted. Rates arrive as percentages and are
//! divided by 100 exactly once. No rounding is applied.

use intrinsic_traits::{Assumptions, Fundamentals, IntrinsicError, Result, TerminalMethod};
use serde::{Deserialize, Serialize};

/// Length of the explicit projection horizon in years.
pub const HORIZON_YEARS: i32 = 5;

/// Every intermediate of a DCF run, for auditing against a spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcfBreakdown {
    /// FCF per share for years 1..=5, undiscounted.
    pub projected_fcf: Vec<f64>,
    /// Present value of each projected FCF.
    pub discounted_fcf: Vec<f64>,
    /// Sum of `discounted_fcf`.
    pub explicit_pv: f64,
    /// Terminal value at the end of year 5, undiscounted.
    pub terminal_value: f64,
    /// Terminal value discounted back five years.
    pub terminal_pv: f64,
    /// `(cash - debt) / shares`, or 0 without shares.
    pub net_cash_per_share: f64,
    /// `explicit_pv + terminal_pv + net_cash_per_share`.
    pub intrinsic_value: f64,
}

impl DcfBreakdown {
    /// FCF per share in the final explicit year.
    #[must_use]
    pub fn final_year_fcf(&self) -> f64 {
        self.projected_fcf.last().copied().unwrap_or(0.0)
    }
}

/// Runs the DCF model and returns every intermediate.
///
/// # Errors
///
/// Returns [`IntrinsicError::Configuration`] when any rate or the exit
/// multiple is not finite, when the Gordon-Growth method is selected with a
/// discount rate that does not exceed terminal growth, or when the discount
/// rate is at or below -100%.
pub fn dcf_breakdown(
    fundamentals: &Fundamentals,
    assumptions: &Assumptions,
) -> Result<DcfBreakdown> {
    let inputs = [
        ("growth rate", assumptions.growth_rate_percent),
        ("discount rate", assumptions.discount_rate_percent),
        ("terminal growth", assumptions.terminal_growth_percent),
        ("exit multiple", assumptions.exit_multiple),
    ];
    if let Some((name, value)) = inputs.iter().find(|(_, v)| !v.is_finite()) {
        return Err(IntrinsicError::Configuration(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    assumptions.check_terminal()?;
    if assumptions.discount_rate_percent <= -100.0 {
        return Err(IntrinsicError::Configuration(format!(
            "discount rate {}% must be above -100%",
            assumptions.discount_rate_percent
        )));
    }

    let g = assumptions.growth_rate_percent / 100.0;
    let r = assumptions.discount_rate_percent / 100.0;

    let mut projected_fcf = Vec::with_capacity(HORIZON_YEARS as usize);
    let mut discounted_fcf = Vec::with_capacity(HORIZON_YEARS as usize);
    let mut fcf = fundamentals.fcf_per_share;
    for year in 1..=HORIZON_YEARS {
        fcf *= 1.0 + g;
        projected_fcf.push(fcf);
        discounted_fcf.push(fcf / (1.0 + r).powi(year));
    }
    let explicit_pv: f64 = discounted_fcf.iter().sum();

    let terminal_value = match assumptions.method {
        TerminalMethod::GordonGrowth => {
            let tg = assumptions.terminal_growth_percent / 100.0;
            fcf * (1.0 + tg) / (r - tg)
        }
        TerminalMethod::MarketMultiple => fcf * assumptions.exit_multiple,
    };
    let terminal_pv = terminal_value / (1.0 + r).powi(HORIZON_YEARS);

    let net_cash_per_share = fundamentals.net_cash_per_share();

    Ok(DcfBreakdown {
        projected_fcf,
        discounted_fcf,
        explicit_pv,
        terminal_value,
        terminal_pv,
        net_cash_per_share,
        intrinsic_value: explicit_pv + terminal_pv + net_cash_per_share,
    })
}

/// Intrinsic value per share.
///
/// # Errors
///
/// See [`dcf_breakdown`].
pub fn intrinsic_value(fundamentals: &Fundamentals, assumptions: &Assumptions) -> Result<f64> {
    dcf_breakdown(fundamentals, assumptions).map(|b| b.intrinsic_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn example() -> (Fundamentals, Assumptions) {
        let f = Fundamentals {
            fcf_per_share: 6.0,
            shares_outstanding_b: 1.0,
            ..Default::default()
        };
        let a = Assumptions {
            growth_rate_percent: 10.0,
            discount_rate_percent: 9.0,
            terminal_growth_percent: 2.0,
            method: TerminalMethod::GordonGrowth,
            ..Default::default()
        };
        (f, a)
    }

    #[test]
    fn test_gordon_example_matches_hand_calculation() {
        let (f, a) = example();
        let b = dcf_breakdown(&f, &a).unwrap();

        let expected_flows = [
            6.6 / 1.09,
            7.26 / 1.09_f64.powi(2),
            7.986 / 1.09_f64.powi(3),
            8.7846 / 1.09_f64.powi(4),
            9.66306 / 1.09_f64.powi(5),
        ];
        for (got, want) in b.discounted_fcf.iter().zip(expected_flows) {
            assert_relative_eq!(*got, want, epsilon = 1e-9);
        }

        assert_relative_eq!(b.explicit_pv, 30.835_857_985, epsilon = 1e-6);
        assert_relative_eq!(b.final_year_fcf(), 9.66306, epsilon = 1e-9);
        assert_relative_eq!(b.terminal_value, 140.804_588_571, epsilon = 1e-6);
        assert_relative_eq!(b.terminal_pv, 91.513_321_447, epsilon = 1e-6);
        assert_relative_eq!(b.net_cash_per_share, 0.0);
        assert_relative_eq!(b.intrinsic_value, 122.349_179_433, epsilon = 1e-6);
    }

    #[test]
    fn test_market_multiple() {
        let (f, a) = example();
        let a = Assumptions {
            method: TerminalMethod::MarketMultiple,
            exit_multiple: 15.0,
            ..a
        };
        let value = intrinsic_value(&f, &a).unwrap();
        assert_relative_eq!(value, 125.040_747_711, epsilon = 1e-6);
    }

    #[test]
    fn test_market_multiple_ignores_terminal_growth() {
        let (f, a) = example();
        let a = Assumptions {
            method: TerminalMethod::MarketMultiple,
            terminal_growth_percent: 50.0,
            ..a
        };
        assert!(intrinsic_value(&f, &a).is_ok());
    }

    #[test]
    fn test_invalid_gordon_is_configuration_error() {
        let (f, a) = example();
        let a = Assumptions {
            discount_rate_percent: 2.0,
            terminal_growth_percent: 5.0,
            ..a
        };
        let err = intrinsic_value(&f, &a).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_discount_at_minus_hundred_rejected() {
        let (f, a) = example();
        let a = Assumptions {
            method: TerminalMethod::MarketMultiple,
            discount_rate_percent: -100.0,
            ..a
        };
        assert!(intrinsic_value(&f, &a).unwrap_err().is_configuration());
    }

    #[test]
    fn test_non_finite_assumptions_rejected() {
        let (f, a) = example();
        let cases = [
            a.with_growth(f64::NAN),
            a.with_discount(f64::NAN),
            a.with_discount(f64::INFINITY),
            Assumptions {
                terminal_growth_percent: f64::NAN,
                ..a.clone()
            },
            Assumptions {
                method: TerminalMethod::MarketMultiple,
                exit_multiple: f64::NEG_INFINITY,
                ..a.clone()
            },
        ];
        for bad in &cases {
            let err = dcf_breakdown(&f, bad).unwrap_err();
            assert!(err.is_configuration(), "{bad:?} gave {err}");
        }
    }

    #[test]
    fn test_net_cash_added_undiscounted() {
        let (f, a) = example();
        let base = intrinsic_value(&f, &a).unwrap();

        let with_cash = Fundamentals {
            cash_b: 30.0,
            debt_b: 10.0,
            shares_outstanding_b: 2.0,
            ..f.clone()
        };
        assert_relative_eq!(
            intrinsic_value(&with_cash, &a).unwrap(),
            base + 10.0,
            epsilon = 1e-9
        );

        let no_shares = Fundamentals {
            cash_b: 30.0,
            shares_outstanding_b: 0.0,
            ..f
        };
        assert_relative_eq!(intrinsic_value(&no_shares, &a).unwrap(), base, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_fcf_is_net_cash_only() {
        let f = Fundamentals {
            shares_outstanding_b: 1.0,
            cash_b: 5.0,
            ..Default::default()
        };
        let value = intrinsic_value(&f, &Assumptions::default()).unwrap();
        assert_relative_eq!(value, 5.0);
    }

    #[test]
    fn test_deterministic() {
        let (f, a) = example();
        assert_eq!(
            intrinsic_value(&f, &a).unwrap(),
            intrinsic_value(&f, &a).unwrap()
        );
    }
}
