//! One-call valuation of a single ticker.

use intrinsic_dcf::{
    BisectionConfig, DcfBreakdown, GridConfig, ReverseDcf, ReverseDcfSolution, SensitivityGrid,
    dcf_breakdown, project,
};
use intrinsic_ratios::{BuyTarget, CapmConfig, FcfYield, Peg, PegVerdict};
use intrinsic_traits::{Assumptions, Fundamentals, MarketPrice, ProjectionPoint, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the components a report runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// CAPM constants for the discount-rate suggestion.
    pub capm: CapmConfig,
    /// Reverse DCF search bounds and tolerance.
    pub bisection: BisectionConfig,
    /// Sensitivity grid size and step.
    pub grid: GridConfig,
}

/// Everything the engine can say about one set of fundamentals.
///
/// Fields that depend on the market price are `None` when no price is known,
/// so a missing quote never reads as a zero yield or a certain buy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Inputs the report was computed from.
    pub fundamentals: Fundamentals,
    /// Assumptions the report was computed under.
    pub assumptions: Assumptions,
    /// Market price, when known.
    pub price: Option<MarketPrice>,
    /// Every DCF intermediate, including the intrinsic value.
    pub breakdown: DcfBreakdown,
    /// Intrinsic value carried forward for years 0 to 5.
    pub projection: Vec<ProjectionPoint>,
    /// Growth × discount sensitivity grid.
    pub grid: SensitivityGrid,
    /// PEG ratio against the assumed growth.
    pub peg: Peg,
    /// PEG classification, `None` when the ratio is not positive.
    pub peg_verdict: Option<PegVerdict>,
    /// CAPM discount rate, percent, when beta is known.
    pub suggested_discount_rate: Option<f64>,
    /// Margin-of-safety buy target.
    pub buy_target: BuyTarget,
    /// FCF yield at the market price.
    pub fcf_yield: Option<FcfYield>,
    /// Whether the price is at or below the buy target.
    pub buyable: Option<bool>,
    /// `(intrinsic - price) / price * 100`.
    pub upside_percent: Option<f64>,
    /// Growth rate the market price implies.
    pub reverse: Option<ReverseDcfSolution>,
    /// Grid cells valuing the stock strictly above the price.
    pub favorable_cells: Option<usize>,
}

impl ValuationReport {
    /// Build a report with default component configuration.
    ///
    /// # Errors
    ///
    /// Returns [`intrinsic_traits::IntrinsicError::Configuration`] when the
    /// assumptions violate the terminal-value precondition or the margin of
    /// safety lies outside `[0, 60]`.
    pub fn build(
        fundamentals: &Fundamentals,
        assumptions: &Assumptions,
        price: Option<MarketPrice>,
    ) -> Result<Self> {
        Self::build_with(fundamentals, assumptions, price, &ReportConfig::default())
    }

    /// Build a report with explicit component configuration.
    ///
    /// # Errors
    ///
    /// See [`ValuationReport::build`].
    pub fn build_with(
        fundamentals: &Fundamentals,
        assumptions: &Assumptions,
        price: Option<MarketPrice>,
        config: &ReportConfig,
    ) -> Result<Self> {
        let breakdown = dcf_breakdown(fundamentals, assumptions)?;
        let value = breakdown.intrinsic_value;
        let projection = project(fundamentals, assumptions)?;
        let grid = SensitivityGrid::with_config(fundamentals, assumptions, &config.grid)?;
        let buy_target = BuyTarget::new(value, assumptions.margin_of_safety_percent)?;

        let peg = Peg::calculate(fundamentals.current_pe, assumptions.growth_rate_percent);
        let suggested_discount_rate = config.capm.suggested_discount_rate(fundamentals.beta);

        let reverse = price
            .map(|p| ReverseDcf::new(config.bisection.clone()).solve(fundamentals, assumptions, p))
            .transpose()?;
        if let Some(solution) = reverse.as_ref().filter(|s| !s.converged) {
            tracing::warn!(
                residual = solution.residual,
                growth = solution.growth_rate_percent,
                "Market price lies outside the searchable growth range"
            );
        }

        tracing::debug!(value, price = ?price.map(MarketPrice::value), "Valuation complete");

        Ok(Self {
            fundamentals: fundamentals.clone(),
            assumptions: assumptions.clone(),
            price,
            peg_verdict: peg.verdict(),
            peg,
            suggested_discount_rate,
            fcf_yield: price.map(|p| FcfYield::calculate(fundamentals.fcf_per_share, p.value())),
            buyable: price.map(|p| buy_target.is_buyable(p.value())),
            upside_percent: price.map(|p| (value - p.value()) / p.value() * 100.0),
            favorable_cells: price.map(|p| grid.favorable_count(p)),
            reverse,
            buy_target,
            breakdown,
            projection,
            grid,
        })
    }

    /// Intrinsic value per share, USD.
    #[must_use]
    pub const fn intrinsic_value(&self) -> f64 {
        self.breakdown.intrinsic_value
    }
}
