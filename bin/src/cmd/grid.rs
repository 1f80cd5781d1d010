//! Grid command implementation.

use crate::data;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use intrinsic::Assumptions;
use intrinsic_dcf::{GridConfig, SensitivityGrid};

/// Print the sensitivity grid for a ticker.
pub(crate) async fn run_grid(
    symbol: &str,
    half_width: usize,
    step: f64,
    assumptions: &Assumptions,
    format: OutputFormat,
) -> Result<()> {
    let loaded = data::load_fundamentals(symbol).await?;
    let config = GridConfig { half_width, step };
    let grid = SensitivityGrid::with_config(&loaded.fundamentals, assumptions, &config)?;

    match format {
        OutputFormat::Json => output::print_json(&grid)?,
        OutputFormat::Text => println!(
            "{}",
            output::render_grid(&loaded.label(), &grid, loaded.price)?
        ),
    }

    Ok(())
}
