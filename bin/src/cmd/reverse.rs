//! Reverse command implementation.

use crate::data;
use crate::output::{self, OutputFormat};
use anyhow::{Result, anyhow};
use intrinsic::{Assumptions, MarketPrice};
use intrinsic_dcf::ReverseDcf;

/// Solve for the growth rate the market price implies.
pub(crate) async fn run_reverse(
    symbol: &str,
    price: Option<f64>,
    assumptions: &Assumptions,
    format: OutputFormat,
) -> Result<()> {
    let loaded = data::load_fundamentals(symbol).await?;

    let target = match price {
        Some(p) => MarketPrice::new(p).ok_or_else(|| anyhow!("price must be positive, got {p}"))?,
        None => loaded
            .price
            .ok_or_else(|| anyhow!("no market price available for {}", loaded.symbol))?,
    };

    let solution = ReverseDcf::default().solve(&loaded.fundamentals, assumptions, target)?;

    match format {
        OutputFormat::Json => output::print_json(&solution)?,
        OutputFormat::Text => println!(
            "{}",
            output::render_reverse(
                &loaded.label(),
                target,
                assumptions.growth_rate_percent,
                &solution
            )?
        ),
    }

    Ok(())
}
