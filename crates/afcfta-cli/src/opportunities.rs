//! # Opportunities CLI — destination ranking for an exporter.
//!
//! ```bash
//! afcfta opportunities --origin KEN
//! afcfta opportunities --origin GHA --sector 18 --limit 5
//! ```

use anyhow::{Context, Result};
use clap::Args;

use afcfta_core::{CountryCode, SectorCode};
use afcfta_scoring::{rank_opportunities_for, TradeOpportunity};

use crate::context::EngineContext;
use crate::output::{print_json, OutputFormat};

/// Opportunities subcommand arguments.
#[derive(Args, Debug)]
pub struct OpportunitiesArgs {
    /// Exporting country (ISO alpha-3).
    #[arg(long)]
    pub origin: String,

    /// Two-digit HS chapter the ranking is for.
    #[arg(long)]
    pub sector: Option<String>,

    /// Show at most this many destinations.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Execute the opportunities subcommand.
pub fn run_opportunities(args: &OpportunitiesArgs, ctx: &EngineContext) -> Result<u8> {
    let origin = CountryCode::parse_field(args.origin.as_str(), "origin")?;
    let sector = args
        .sector
        .as_deref()
        .map(|s| SectorCode::parse_field(s, "sector"))
        .transpose()?;
    let mut ranked = rank_opportunities_for(&origin, ctx.data.as_ref(), sector.as_ref())
        .with_context(|| format!("cannot rank opportunities for {origin}"))?;
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    match ctx.format {
        OutputFormat::Json => print_json(&ranked)?,
        OutputFormat::Table => print_ranking(&origin, &ranked),
    }
    Ok(0)
}

fn print_ranking(origin: &CountryCode, ranked: &[TradeOpportunity]) {
    match ranked.first().and_then(|o| o.sector.as_ref()) {
        Some(sector) => println!(
            "Export opportunities from {origin} for chapter {} ({}):",
            sector.code, sector.name
        ),
        None => println!("Export opportunities from {origin}:"),
    }
    for (rank, opportunity) in ranked.iter().enumerate() {
        let blocs: Vec<&str> = opportunity.shared_blocs.iter().map(|b| b.as_str()).collect();
        println!(
            "  {:>2}. {} {:<28} {:>6.2}  {:<8} {}",
            rank + 1,
            opportunity.country,
            opportunity.name,
            opportunity.score,
            opportunity.region.as_str(),
            blocs.join(", ")
        );
    }
    if ranked.is_empty() {
        println!("  (no candidate markets loaded; pass --data)");
    }
}
