//! Manual command implementation.

use crate::output::{self, OutputFormat};
use anyhow::Result;
use intrinsic::{Assumptions, Fundamentals, MarketPrice, ValuationReport};

/// Value hand-entered fundamentals.
///
/// A missing or non-positive price is treated as unknown.
pub(crate) fn run_manual(
    fundamentals: &Fundamentals,
    price: Option<f64>,
    assumptions: &Assumptions,
    format: OutputFormat,
) -> Result<()> {
    let price = price.and_then(MarketPrice::new);
    let report = ValuationReport::build(fundamentals, assumptions, price)?;

    match format {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Text => println!("{}", output::render_report("manual input", &report)?),
    }

    Ok(())
}
