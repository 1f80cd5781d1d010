//! Reverse DCF: the growth rate implied by a market price.

use crate::dcf::intrinsic_value;
use intrinsic_traits::{Assumptions, Fundamentals, MarketPrice, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the bisection search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BisectionConfig {
    /// Lowest growth searched, as a decimal (default: -0.50)
    pub lower: f64,

    /// Highest growth searched, as a decimal (default: 1.00)
    pub upper: f64,

    /// Iteration budget (default: 100)
    pub max_iterations: usize,

    /// Absolute price error accepted as converged (default: 0.1)
    pub tolerance: f64,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            lower: -0.50,
            upper: 1.00,
            max_iterations: 100,
            tolerance: 0.1,
        }
    }
}

/// Outcome of a reverse DCF solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseDcfSolution {
    /// Implied annual growth, percent.
    pub growth_rate_percent: f64,
    /// DCF value at the implied growth.
    pub implied_value: f64,
    /// `|implied_value - target|`.
    pub residual: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the residual fell under the tolerance before the budget ran out.
    pub converged: bool,
}

/// Bisection solver over the growth assumption.
///
/// Relies on the DCF value being non-decreasing in growth, which holds for
/// positive FCF. When the target lies outside the searchable range the
/// result pins to the nearest bound; this is reported through `residual`
/// and `converged`, never as an error.
#[derive(Debug, Clone, Default)]
pub struct ReverseDcf {
    config: BisectionConfig,
}

impl ReverseDcf {
    /// Create a solver with the given configuration.
    #[must_use]
    pub const fn new(config: BisectionConfig) -> Self {
        Self { config }
    }

    /// Find the growth rate at which the DCF value matches `target`, holding
    /// every other assumption fixed.
    ///
    /// # Errors
    ///
    /// Only the calculator's precondition violations are returned; an
    /// unreachable target still yields a best-effort solution.
    pub fn solve(
        &self,
        fundamentals: &Fundamentals,
        assumptions: &Assumptions,
        target: MarketPrice,
    ) -> Result<ReverseDcfSolution> {
        assumptions.check_terminal()?;

        let target = target.value();
        let value_at = |g: f64| intrinsic_value(fundamentals, &assumptions.with_growth(g * 100.0));

        let mut low = self.config.lower;
        let mut high = self.config.upper;

        for iteration in 1..=self.config.max_iterations {
            let mid = (low + high) / 2.0;
            let value = value_at(mid)?;
            let residual = (value - target).abs();

            if residual < self.config.tolerance {
                return Ok(ReverseDcfSolution {
                    growth_rate_percent: mid * 100.0,
                    implied_value: value,
                    residual,
                    iterations: iteration,
                    converged: true,
                });
            }

            if value < target {
                low = mid;
            } else {
                high = mid;
            }
        }

        let mid = (low + high) / 2.0;
        let value = value_at(mid)?;
        let residual = (value - target).abs();
        tracing::debug!(
            target,
            growth = mid * 100.0,
            residual,
            "Reverse DCF exhausted its iteration budget"
        );

        Ok(ReverseDcfSolution {
            growth_rate_percent: mid * 100.0,
            implied_value: value,
            residual,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }
}
