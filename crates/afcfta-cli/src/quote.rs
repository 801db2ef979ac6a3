//! # Quote CLI — MFN vs AfCFTA comparison for one consignment.
//!
//! ```bash
//! afcfta quote --code 010121 --origin GHA --dest KEN --value 100000
//! afcfta quote --code 6109.10 --origin KEN --dest TZA --value 25000 --category D --year 2026
//! ```

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;

use afcfta_core::{ReferenceYear, AFCFTA_EPOCH_YEAR};
use afcfta_tariff::{LevyCascadeResult, QuoteRequest, TariffQuote};

use crate::context::EngineContext;
use crate::output::{pct, print_json, OutputFormat};

/// Quote subcommand arguments.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Six-digit HS code (dots and spaces allowed, e.g. 0101.21).
    #[arg(long)]
    pub code: String,

    /// Exporting country (ISO alpha-3).
    #[arg(long)]
    pub origin: String,

    /// Importing country (ISO alpha-3).
    #[arg(long = "dest")]
    pub destination: String,

    /// Merchandise (customs) value.
    #[arg(long)]
    pub value: Decimal,

    /// Dismantling category override (A, B, C or D).
    #[arg(long)]
    pub category: Option<String>,

    /// Year to evaluate the preferential rate for. Defaults to the
    /// configured reference year, then the current year.
    #[arg(long)]
    pub year: Option<i32>,
}

/// Execute the quote subcommand.
pub fn run_quote(args: &QuoteArgs, ctx: &EngineContext) -> Result<u8> {
    let reference_year = args
        .year
        .map_or_else(|| ctx.config.reference_year(), ReferenceYear::new);
    let request = QuoteRequest {
        hs_code: args.code.clone(),
        origin: args.origin.clone(),
        destination: args.destination.clone(),
        value: args.value,
        category: args.category.clone(),
        reference_year,
    };
    let quote = ctx
        .calculator()
        .quote(&request)
        .with_context(|| format!("cannot quote {} {} → {}", args.code, args.origin, args.destination))?;

    match ctx.format {
        OutputFormat::Json => print_json(&quote)?,
        OutputFormat::Table => print_quote(&quote),
    }
    Ok(0)
}

fn print_quote(quote: &TariffQuote) {
    println!(
        "{} → {}  HS {}  (chapter {}: {})",
        quote.origin, quote.destination, quote.hs_code, quote.sector, quote.sector_name
    );
    println!("  {}", quote.section);
    let category = quote
        .category
        .map_or_else(|| "unrecognized".to_string(), |c| c.to_string());
    println!(
        "  Category {category}, {} year(s) since {AFCFTA_EPOCH_YEAR} (reference year {}){}",
        quote.years_since_epoch,
        quote.reference_year,
        if quote.destination_is_ldc { ", LDC destination" } else { "" }
    );
    println!();
    println!("  {:<10} {:>8} {:>16} {:>18}", "Regime", "Rate", "Duty", "Landed cost");
    println!(
        "  {:<10} {:>8} {:>16} {:>18}",
        "MFN",
        pct(quote.mfn_rate),
        quote.mfn_amount,
        quote.mfn_cascade.total
    );
    println!(
        "  {:<10} {:>8} {:>16} {:>18}",
        "AfCFTA",
        pct(quote.afcfta_rate),
        quote.afcfta_amount,
        quote.afcfta_cascade.total
    );
    println!();
    println!(
        "  Savings: {} ({}){}",
        quote.savings_amount,
        pct(quote.savings_pct),
        if quote.is_beneficial { "" } else { " (no benefit)" }
    );
    for anomaly in &quote.anomalies {
        println!("  Note: {anomaly}");
    }
    println!();
    println!("  AfCFTA levy cascade:");
    print_cascade(&quote.afcfta_cascade);
}

/// Journal rows, one per line.
pub fn print_cascade(cascade: &LevyCascadeResult) {
    for step in &cascade.steps {
        println!(
            "  {:>2}. {:<26} {:>8} on {:>16} = {:>14}  → {:>16}  {}",
            step.index,
            step.name,
            pct(step.rate),
            step.base,
            step.amount,
            step.cumulative_total,
            step.legal_ref
        );
    }
    println!("      Total levies: {}  Landed cost: {}", cascade.total_levies, cascade.total);
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn args(code: &str, category: Option<&str>) -> QuoteArgs {
        QuoteArgs {
            code: code.to_string(),
            origin: "GHA".to_string(),
            destination: "KEN".to_string(),
            value: dec!(100000),
            category: category.map(str::to_string),
            year: Some(2025),
        }
    }

    #[test]
    fn quote_succeeds_in_both_formats() {
        for format in [OutputFormat::Json, OutputFormat::Table] {
            let ctx = EngineContext::builtin(format);
            assert_eq!(run_quote(&args("010121", None), &ctx).unwrap(), 0);
        }
    }

    #[test]
    fn unrecognized_category_still_quotes() {
        let ctx = EngineContext::builtin(OutputFormat::Table);
        assert_eq!(run_quote(&args("010121", Some("Q")), &ctx).unwrap(), 0);
    }

    #[test]
    fn invalid_code_reports_context() {
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let err = run_quote(&args("01", None), &ctx).unwrap_err();
        assert!(err.to_string().contains("cannot quote 01"));
        assert!(format!("{err:#}").contains("hs_code"));
    }
}
