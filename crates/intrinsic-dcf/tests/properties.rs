//! Property tests for the DCF calculator, reverse solver and sensitivity grid.

use intrinsic_dcf::{ReverseDcf, SensitivityGrid, intrinsic_value};
use intrinsic_traits::{Assumptions, Fundamentals, MarketPrice, TerminalMethod};
use proptest::prelude::*;

fn arb_method() -> impl Strategy<Value = TerminalMethod> {
    prop_oneof![
        Just(TerminalMethod::GordonGrowth),
        Just(TerminalMethod::MarketMultiple),
    ]
}

/// Assumptions with `discount > terminal growth` so both methods are valid.
fn arb_assumptions() -> impl Strategy<Value = Assumptions> {
    (
        -30.0..60.0_f64,
        4.0..20.0_f64,
        0.0..3.0_f64,
        0.0..40.0_f64,
        arb_method(),
    )
        .prop_map(|(growth, discount, terminal, multiple, method)| Assumptions {
            growth_rate_percent: growth,
            discount_rate_percent: discount,
            terminal_growth_percent: terminal,
            exit_multiple: multiple,
            method,
            margin_of_safety_percent: 10.0,
        })
}

fn arb_fundamentals() -> impl Strategy<Value = Fundamentals> {
    (0.01..50.0_f64, 0.1..20.0_f64, 0.0..100.0_f64, 0.0..100.0_f64).prop_map(
        |(fcf, shares, cash, debt)| Fundamentals {
            fcf_per_share: fcf,
            shares_outstanding_b: shares,
            cash_b: cash,
            debt_b: debt,
            ..Default::default()
        },
    )
}

proptest! {
    /// Non-negative FCF with cash covering debt never values below zero.
    #[test]
    fn value_non_negative(
        mut f in arb_fundamentals(),
        a in arb_assumptions(),
    ) {
        f.cash_b = f.cash_b.max(f.debt_b);
        let value = intrinsic_value(&f, &a).unwrap();
        prop_assert!(value >= 0.0);
    }

    /// Raising growth never lowers the value for positive FCF.
    #[test]
    fn monotone_in_growth(
        f in arb_fundamentals(),
        a in arb_assumptions(),
        bump in 0.0..20.0_f64,
    ) {
        let low = intrinsic_value(&f, &a).unwrap();
        let high = intrinsic_value(&f, &a.with_growth(a.growth_rate_percent + bump)).unwrap();
        prop_assert!(high >= low - 1e-9 * low.abs().max(1.0));
    }

    /// Raising the discount rate never raises the value.
    #[test]
    fn monotone_in_discount(
        f in arb_fundamentals(),
        a in arb_assumptions(),
        bump in 0.0..20.0_f64,
    ) {
        let base = intrinsic_value(&f, &a).unwrap();
        let dearer = intrinsic_value(&f, &a.with_discount(a.discount_rate_percent + bump)).unwrap();
        prop_assert!(dearer <= base + 1e-9 * base.abs().max(1.0));
    }

    /// Solving for the growth behind a reachable price reproduces that price.
    #[test]
    fn reverse_round_trip(
        fcf in 0.5..50.0_f64,
        a in arb_assumptions(),
        growth in -40.0..90.0_f64,
    ) {
        let f = Fundamentals {
            fcf_per_share: fcf,
            shares_outstanding_b: 1.0,
            ..Default::default()
        };
        let a = Assumptions { exit_multiple: a.exit_multiple.max(1.0), ..a };
        let target = intrinsic_value(&f, &a.with_growth(growth)).unwrap();
        let price = MarketPrice::new(target).unwrap();

        let solution = ReverseDcf::default().solve(&f, &a, price).unwrap();
        let check = intrinsic_value(&f, &a.with_growth(solution.growth_rate_percent)).unwrap();
        prop_assert!((check - target).abs() < 0.1);
        prop_assert!(solution.converged);
    }

    /// The grid's center cell is the unperturbed valuation, bit for bit.
    #[test]
    fn grid_center_is_exact(
        f in arb_fundamentals(),
        a in arb_assumptions(),
    ) {
        let grid = SensitivityGrid::generate(&f, &a).unwrap();
        let center = grid.cell(3, 3).unwrap();
        prop_assert_eq!(center.value, Some(intrinsic_value(&f, &a).unwrap()));
        prop_assert_eq!(grid.iter().count(), 49);
    }
}
