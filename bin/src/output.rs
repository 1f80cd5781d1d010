//! Text and JSON rendering for CLI output.

use anyhow::Result;
use clap::ValueEnum;
use intrinsic::ValuationReport;
use intrinsic_dcf::{ReverseDcfSolution, SensitivityGrid};
use intrinsic_traits::MarketPrice;
use serde::Serialize;
use std::fmt::Write;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn banner(title: &str) -> String {
    let bar = "═".repeat(62);
    format!("\n╔{bar}╗\n║ {title:^60} ║\n╚{bar}╝\n")
}

fn rule(title: &str) -> String {
    let bar = "━".repeat(60);
    format!("{bar}\n{title}\n{bar}\n")
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("${v:.2}"))
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}%"))
}

/// Render a full valuation report.
pub(crate) fn render_report(label: &str, report: &ValuationReport) -> Result<String> {
    let mut out = banner(&format!("Valuation: {label}"));
    let a = &report.assumptions;
    let f = &report.fundamentals;
    let b = &report.breakdown;
    let price = report.price.map(MarketPrice::value);

    writeln!(out, "Price:            {}", money(price))?;
    writeln!(out, "Intrinsic value:  {}", money(Some(report.intrinsic_value())))?;
    writeln!(out, "Upside:           {}", percent(report.upside_percent))?;
    writeln!(
        out,
        "Buy target:       {} ({:.0}% margin){}",
        money(Some(report.buy_target.target_price)),
        report.buy_target.margin_of_safety_percent,
        match report.buyable {
            Some(true) => "  BUY",
            Some(false) => "",
            None => "  (price unknown)",
        }
    )?;
    out.push('\n');

    out.push_str(&rule(&format!(
        "ASSUMPTIONS (g {:.1}%, r {:.1}%, terminal {})",
        a.growth_rate_percent,
        a.discount_rate_percent,
        match a.method {
            intrinsic::TerminalMethod::GordonGrowth =>
                format!("gordon {:.1}%", a.terminal_growth_percent),
            intrinsic::TerminalMethod::MarketMultiple =>
                format!("multiple {:.1}x", a.exit_multiple),
        }
    )));
    writeln!(out, "{:<6} {:>14} {:>14}", "Year", "FCF/share", "Present value")?;
    writeln!(out, "{}", "─".repeat(36))?;
    for (i, (fcf, pv)) in b.projected_fcf.iter().zip(&b.discounted_fcf).enumerate() {
        writeln!(out, "{:<6} {:>14.2} {:>14.2}", i + 1, fcf, pv)?;
    }
    writeln!(out, "{}", "─".repeat(36))?;
    writeln!(out, "Explicit PV:      {:>12.2}", b.explicit_pv)?;
    writeln!(out, "Terminal value:   {:>12.2}", b.terminal_value)?;
    writeln!(out, "Terminal PV:      {:>12.2}", b.terminal_pv)?;
    writeln!(out, "Net cash/share:   {:>12.2}", b.net_cash_per_share)?;
    out.push('\n');

    out.push_str(&rule("RATIOS"));
    writeln!(
        out,
        "PEG:              {:>8.2}  {}",
        report.peg.value,
        report.peg_verdict.map_or("n/a", |v| v.description())
    )?;
    match report.fcf_yield {
        Some(y) => writeln!(
            out,
            "FCF yield:        {:>7.2}%  {}",
            y.percent,
            y.verdict().description()
        )?,
        None => writeln!(out, "FCF yield:             n/a")?,
    }
    writeln!(
        out,
        "CAPM discount:    {:>8}",
        percent(report.suggested_discount_rate)
    )?;
    writeln!(
        out,
        "P/E:              {:>8.2}  (historical {:.2})",
        f.current_pe, f.historical_pe
    )?;
    if let Some(cagr) = f.fcf_cagr_percent {
        writeln!(out, "FCF CAGR:         {cagr:>7.2}%")?;
    }
    if let Some(reverse) = &report.reverse {
        writeln!(
            out,
            "Implied growth:   {:>7.2}%{}",
            reverse.growth_rate_percent,
            if reverse.converged { "" } else { "  (outside search range)" }
        )?;
    }
    out.push('\n');

    out.push_str(&rule("PROJECTION"));
    for point in &report.projection {
        writeln!(out, "Year {}: {:>12.2}", point.year, point.value)?;
    }
    if let Some(count) = report.favorable_cells {
        writeln!(
            out,
            "\n{count} of {} sensitivity cells value the stock above the price",
            report.grid.iter().count()
        )?;
    }

    Ok(out)
}

/// Render a reverse DCF solution.
pub(crate) fn render_reverse(
    label: &str,
    price: MarketPrice,
    assumed_growth: f64,
    solution: &ReverseDcfSolution,
) -> Result<String> {
    let mut out = banner(&format!("Reverse DCF: {label}"));
    writeln!(out, "Price:            ${:.2}", price.value())?;
    writeln!(out, "Implied growth:   {:.2}%", solution.growth_rate_percent)?;
    writeln!(out, "Assumed growth:   {assumed_growth:.2}%")?;
    writeln!(out, "Value at implied: ${:.2}", solution.implied_value)?;
    writeln!(
        out,
        "Residual:         {:.4} after {} iterations",
        solution.residual, solution.iterations
    )?;
    if !solution.converged {
        writeln!(
            out,
            "\nThe price lies outside the searchable growth range; \
             the result is pinned to the nearest bound."
        )?;
    }
    Ok(out)
}

/// Render a sensitivity grid, marking cells above `price` with `*`.
pub(crate) fn render_grid(
    label: &str,
    grid: &SensitivityGrid,
    price: Option<MarketPrice>,
) -> Result<String> {
    let mut out = banner(&format!("Sensitivity: {label}"));
    write!(out, "{:>9}", "g \\ r")?;
    for r in &grid.discount_axis {
        write!(out, " {:>9}", format!("{r:.1}%"))?;
    }
    out.push('\n');
    writeln!(out, "{}", "─".repeat(9 + 10 * grid.discount_axis.len()))?;

    for (g, row) in grid.growth_axis.iter().zip(&grid.cells) {
        write!(out, "{:>9}", format!("{g:.1}%"))?;
        for cell in row {
            let text = match cell.value {
                Some(v) => {
                    let favorable = price.is_some_and(|p| cell.is_favorable(p));
                    let mark = if favorable { "*" } else { "" };
                    format!("{v:.2}{mark}")
                }
                None => "n/a".to_string(),
            };
            write!(out, " {text:>9}")?;
        }
        out.push('\n');
    }

    if let Some(p) = price {
        writeln!(
            out,
            "\n* above the ${:.2} price ({} of {} cells)",
            p.value(),
            grid.favorable_count(p),
            grid.iter().count()
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intrinsic::{Assumptions, Fundamentals};

    fn fundamentals() -> Fundamentals {
        Fundamentals {
            fcf_per_share: 6.0,
            shares_outstanding_b: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_without_price() {
        let report =
            ValuationReport::build(&fundamentals(), &Assumptions::default(), None).unwrap();
        let text = render_report("manual", &report).unwrap();

        assert!(text.contains("Valuation: manual"));
        assert!(text.contains("Price:            n/a"));
        assert!(text.contains("(price unknown)"));
        assert!(text.contains("FCF yield:             n/a"));
        assert!(!text.contains("Implied growth"));
    }

    #[test]
    fn test_report_with_price() {
        let report = ValuationReport::build(
            &fundamentals(),
            &Assumptions::default(),
            MarketPrice::new(100.0),
        )
        .unwrap();
        let text = render_report("ACME", &report).unwrap();

        assert!(text.contains("Price:            $100.00"));
        assert!(text.contains("BUY"));
        assert!(text.contains("Implied growth"));
        assert!(text.contains("sensitivity cells"));
    }

    #[test]
    fn test_grid_marks_favorable_cells() {
        let grid = SensitivityGrid::generate(&fundamentals(), &Assumptions::default()).unwrap();
        let text = render_grid("ACME", &grid, MarketPrice::new(100.0)).unwrap();

        assert!(text.contains('*'));
        assert!(text.contains("cells)"));
        assert_eq!(text.lines().filter(|l| l.contains("% ")).count(), 8);

        let bare = render_grid("ACME", &grid, None).unwrap();
        assert!(!bare.contains('*'));
    }
}
