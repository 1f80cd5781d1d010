//! Priority-ordered derivation tables.
//!
//! Each field that can be obtained more than one way is described by a slice
//! of [`Derivation`]s. The first strategy that yields a finite value wins and
//! later strategies are never evaluated.

use intrinsic_traits::RawFundamentals;

/// Inputs available to a derivation strategy.
#[derive(Debug, Clone, Copy)]
pub struct DerivationInput<'a> {
    /// Raw provider fields.
    pub raw: &'a RawFundamentals,
    /// Reporting-currency to USD rate.
    pub rate: f64,
    /// Live USD price, already validated as positive.
    pub price_usd: f64,
}

impl DerivationInput<'_> {
    fn shares(&self) -> Option<f64> {
        self.raw.shares_outstanding_b.filter(|s| *s > 0.0)
    }
}

/// A named strategy for deriving one field.
#[derive(Debug, Clone, Copy)]
pub struct Derivation {
    /// Identifier logged when this strategy resolves the field.
    pub name: &'static str,
    /// Returns `None` when its inputs are missing.
    pub strategy: fn(&DerivationInput<'_>) -> Option<f64>,
}

/// Result of running a derivation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    /// Derived value, `0.0` when no strategy applied.
    pub value: f64,
    /// Name of the winning strategy.
    pub source: Option<&'static str>,
}

/// Evaluates `table` in order and returns the first finite value, or `0.0`.
#[must_use]
pub fn first_match(field: &str, table: &[Derivation], input: &DerivationInput<'_>) -> Derived {
    for derivation in table {
        if let Some(value) = (derivation.strategy)(input).filter(|v| v.is_finite()) {
            tracing::debug!(field, source = derivation.name, value, "Derived field");
            return Derived {
                value,
                source: Some(derivation.name),
            };
        }
    }

    tracing::debug!(field, "No derivation applied, defaulting to 0");
    Derived {
        value: 0.0,
        source: None,
    }
}

/// FCF per share: total FCF over shares, else price over price-to-FCF.
pub const FCF_PER_SHARE: &[Derivation] = &[
    Derivation {
        name: "total_fcf_per_share",
        strategy: fcf_from_total,
    },
    Derivation {
        name: "price_over_pfcf",
        strategy: fcf_from_price_ratio,
    },
];

/// Total cash: reported total, else cash per share times shares.
pub const CASH: &[Derivation] = &[
    Derivation {
        name: "total_cash",
        strategy: cash_from_total,
    },
    Derivation {
        name: "cash_per_share_times_shares",
        strategy: cash_from_per_share,
    },
];

/// Total debt: reported total, else shares times book value times D/E.
pub const DEBT: &[Derivation] = &[
    Derivation {
        name: "total_debt",
        strategy: debt_from_total,
    },
    Derivation {
        name: "book_value_times_leverage",
        strategy: debt_from_leverage,
    },
];

fn fcf_from_total(input: &DerivationInput<'_>) -> Option<f64> {
    let total = input.raw.total_fcf?;
    let shares = input.shares()?;
    Some(total / shares * input.rate)
}

// The price is already USD and the ratio is unit-free, so no conversion.
fn fcf_from_price_ratio(input: &DerivationInput<'_>) -> Option<f64> {
    let ratio = input.raw.price_to_fcf.filter(|r| *r != 0.0)?;
    Some(input.price_usd / ratio)
}

fn cash_from_total(input: &DerivationInput<'_>) -> Option<f64> {
    input.raw.total_cash.map(|c| c * input.rate)
}

fn cash_from_per_share(input: &DerivationInput<'_>) -> Option<f64> {
    let per_share = input.raw.cash_per_share?;
    let shares = input.shares()?;
    Some(per_share * shares * input.rate)
}

fn debt_from_total(input: &DerivationInput<'_>) -> Option<f64> {
    input.raw.total_debt.map(|d| d * input.rate)
}

fn debt_from_leverage(input: &DerivationInput<'_>) -> Option<f64> {
    let shares = input.shares()?;
    let book = input.raw.book_value_per_share?;
    let leverage = input.raw.debt_to_equity?;
    Some(shares * book * leverage * input.rate)
}
