//! # Sectors CLI — the HS chapter table.

use anyhow::Result;
use clap::Args;

use afcfta_core::{ReferenceDataProvider, SectorInfo};
use afcfta_tariff::classify_sector;

use crate::context::EngineContext;
use crate::output::{print_json, OutputFormat};

/// Sectors subcommand arguments.
#[derive(Args, Debug)]
pub struct SectorsArgs {
    /// Only chapters in this HS section (Roman numeral, e.g. XVI).
    #[arg(long)]
    pub section: Option<String>,
}

/// Execute the sectors subcommand.
pub fn run_sectors(args: &SectorsArgs, ctx: &EngineContext) -> Result<u8> {
    let sectors: Vec<&SectorInfo> = ctx
        .data
        .sectors()
        .into_iter()
        .filter(|s| {
            args.section
                .as_deref()
                .map_or(true, |n| s.section.numeral().eq_ignore_ascii_case(n.trim()))
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => print_json(&sectors)?,
        OutputFormat::Table => {
            println!("  {:<3} {:<5} {:<4} Name", "HS", "Sect.", "Cat.");
            for sector in &sectors {
                println!(
                    "  {:<3} {:<5} {:<4} {}",
                    sector.code.as_str(),
                    sector.section.numeral(),
                    classify_sector(&sector.code).as_str(),
                    sector.name
                );
            }
            println!();
            println!("Total: {} chapters", sectors.len());
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_and_filtered() {
        let ctx = EngineContext::builtin(OutputFormat::Table);
        assert_eq!(run_sectors(&SectorsArgs { section: None }, &ctx).unwrap(), 0);
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let args = SectorsArgs {
            section: Some("xvi".to_string()),
        };
        assert_eq!(run_sectors(&args, &ctx).unwrap(), 0);
    }
}
