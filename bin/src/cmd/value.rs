//! Value command implementation.

use crate::data;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use intrinsic::{Assumptions, ValuationReport};
use intrinsic_ratios::CapmConfig;

/// Fetch a ticker and print its full valuation report.
pub(crate) async fn run_value(
    symbol: &str,
    mut assumptions: Assumptions,
    use_capm: bool,
    format: OutputFormat,
) -> Result<()> {
    let loaded = data::load_fundamentals(symbol).await?;

    if use_capm {
        match CapmConfig::default().suggested_discount_rate(loaded.fundamentals.beta) {
            Some(rate) => assumptions.discount_rate_percent = rate,
            None => {
                tracing::warn!(symbol = %loaded.symbol, "No beta reported, keeping discount rate");
            }
        }
    }

    let report = ValuationReport::build(&loaded.fundamentals, &assumptions, loaded.price)?;

    match format {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Text => {
            print!("{}", output::render_report(&loaded.label(), &report)?);
            if loaded.price.is_some() {
                println!("Day change:       {:+.2}%", loaded.daily_change_percent);
            }
            println!();
        }
    }

    Ok(())
}
