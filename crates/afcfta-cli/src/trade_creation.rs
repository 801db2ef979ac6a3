//! # Trade-Creation CLI — import growth expected from a tariff cut.
//!
//! ```bash
//! afcfta trade-creation --mfn-rate 15 --afcfta-rate 9
//! afcfta trade-creation --mfn-rate 35 --afcfta-rate 0 --elasticity 2
//! ```

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;

use afcfta_scoring::estimate_trade_creation;

use crate::context::EngineContext;
use crate::output::{pct, print_json, OutputFormat};

/// Trade-creation subcommand arguments.
#[derive(Args, Debug)]
pub struct TradeCreationArgs {
    /// MFN rate in percent.
    #[arg(long)]
    pub mfn_rate: Decimal,

    /// AfCFTA preferential rate in percent.
    #[arg(long)]
    pub afcfta_rate: Decimal,

    /// Import-demand elasticity. Defaults to the configured value.
    #[arg(long)]
    pub elasticity: Option<Decimal>,
}

/// Execute the trade-creation subcommand.
pub fn run_trade_creation(args: &TradeCreationArgs, ctx: &EngineContext) -> Result<u8> {
    let elasticity = args.elasticity.unwrap_or(ctx.config.trade_elasticity);
    let estimate = estimate_trade_creation(args.mfn_rate, args.afcfta_rate, elasticity)
        .context("cannot estimate trade creation")?;

    match ctx.format {
        OutputFormat::Json => print_json(&estimate)?,
        OutputFormat::Table => {
            println!(
                "Tariff cut {} → {} ({} points), elasticity {elasticity}",
                pct(args.mfn_rate),
                pct(args.afcfta_rate),
                estimate.reduction_pct
            );
            println!(
                "Expected import increase: {} ({})",
                pct(estimate.increase_pct),
                estimate.interpretation
            );
        }
    }
    Ok(0)
}
