//! Intrinsic CLI binary.
//!
//! Provides a command-line interface for the Intrinsic valuation engine.

mod cmd;
mod data;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use intrinsic::{Assumptions, Fundamentals, TerminalMethod};
use output::OutputFormat;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "intrinsic")]
#[command(about = "Discounted cash flow valuation for individual equities", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch fundamentals for a ticker and print a full valuation
    Value {
        /// Ticker symbol
        symbol: String,

        #[command(flatten)]
        assumptions: AssumptionArgs,

        /// Replace the discount rate with the CAPM suggestion when beta is known
        #[arg(long)]
        use_capm: bool,
    },

    /// Value hand-entered fundamentals without fetching anything
    Manual {
        #[command(flatten)]
        fundamentals: FundamentalArgs,

        /// Market price in USD (omit if unknown)
        #[arg(long)]
        price: Option<f64>,

        #[command(flatten)]
        assumptions: AssumptionArgs,
    },

    /// Solve for the growth rate implied by the market price
    Reverse {
        /// Ticker symbol
        symbol: String,

        /// Price to solve against instead of the live quote
        #[arg(long)]
        price: Option<f64>,

        #[command(flatten)]
        assumptions: AssumptionArgs,
    },

    /// Print the growth × discount sensitivity grid
    Grid {
        /// Ticker symbol
        symbol: String,

        /// Steps on each side of the base assumptions
        #[arg(long, default_value_t = 3)]
        half_width: usize,

        /// Step size in percentage points
        #[arg(long, default_value_t = 1.0)]
        step: f64,

        #[command(flatten)]
        assumptions: AssumptionArgs,
    },
}

/// Valuation assumptions shared by every command.
#[derive(Args, Debug, Clone)]
struct AssumptionArgs {
    /// Annual FCF growth over the next five years, percent
    #[arg(short, long, default_value_t = 10.0)]
    growth: f64,

    /// Discount rate, percent
    #[arg(short, long, default_value_t = 9.0)]
    discount: f64,

    /// Perpetual growth for the Gordon-Growth terminal value, percent
    #[arg(short, long, default_value_t = 2.5)]
    terminal_growth: f64,

    /// Exit multiple for the market-multiple terminal value
    #[arg(long, default_value_t = 15.0)]
    exit_multiple: f64,

    /// Terminal-value method (gordon, multiple)
    #[arg(short, long, default_value = "gordon")]
    method: TerminalMethod,

    /// Margin of safety for the buy target, percent
    #[arg(long, env = "INTRINSIC_MARGIN_OF_SAFETY", default_value_t = 10.0)]
    margin: f64,
}

impl AssumptionArgs {
    fn to_assumptions(&self) -> Assumptions {
        Assumptions {
            growth_rate_percent: self.growth,
            discount_rate_percent: self.discount,
            terminal_growth_percent: self.terminal_growth,
            exit_multiple: self.exit_multiple,
            method: self.method,
            margin_of_safety_percent: self.margin,
        }
    }
}

/// Fundamentals entered by hand, all in USD.
#[derive(Args, Debug, Clone)]
struct FundamentalArgs {
    /// Free cash flow per share
    #[arg(long)]
    fcf: f64,

    /// Shares outstanding, billions
    #[arg(long, default_value_t = 0.0)]
    shares: f64,

    /// Total cash, billions
    #[arg(long, default_value_t = 0.0)]
    cash: f64,

    /// Total debt, billions
    #[arg(long, default_value_t = 0.0)]
    debt: f64,

    /// Trailing P/E
    #[arg(long, default_value_t = 0.0)]
    pe: f64,

    /// Multi-year average P/E
    #[arg(long, default_value_t = 0.0)]
    historical_pe: f64,

    /// 52-week high
    #[arg(long, default_value_t = 0.0)]
    year_high: f64,

    /// Market beta
    #[arg(long)]
    beta: Option<f64>,
}

impl FundamentalArgs {
    fn to_fundamentals(&self) -> Fundamentals {
        Fundamentals {
            fcf_per_share: self.fcf,
            shares_outstanding_b: self.shares.max(0.0),
            cash_b: self.cash,
            debt_b: self.debt,
            current_pe: self.pe,
            historical_pe: self.historical_pe,
            year_high: self.year_high,
            beta: self.beta,
            fcf_cagr_percent: None,
        }
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Value {
            symbol,
            assumptions,
            use_capm,
        } => {
            cmd::value::run_value(&symbol, assumptions.to_assumptions(), use_capm, format).await?;
        }
        Commands::Manual {
            fundamentals,
            price,
            assumptions,
        } => {
            cmd::manual::run_manual(
                &fundamentals.to_fundamentals(),
                price,
                &assumptions.to_assumptions(),
                format,
            )?;
        }
        Commands::Reverse {
            symbol,
            price,
            assumptions,
        } => {
            cmd::reverse::run_reverse(&symbol, price, &assumptions.to_assumptions(), format)
                .await?;
        }
        Commands::Grid {
            symbol,
            half_width,
            step,
            assumptions,
        } => {
            cmd::grid::run_grid(
                &symbol,
                half_width,
                step,
                &assumptions.to_assumptions(),
                format,
            )
            .await?;
        }
    }

    Ok(())
}
