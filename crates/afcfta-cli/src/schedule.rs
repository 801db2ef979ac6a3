//! # Schedule CLI — year-by-year phase-out projection.
//!
//! ```bash
//! afcfta schedule --base-rate 15 --category C
//! afcfta schedule --base-rate 35 --category D --ldc --from 2021 --to 2035
//! ```

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use afcfta_core::{ReferenceYear, AFCFTA_EPOCH_YEAR};
use afcfta_tariff::{PhaseOutPoint, PhaseOutSchedule};

use crate::context::EngineContext;
use crate::output::{pct, print_json, OutputFormat};

/// Schedule subcommand arguments.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// MFN base rate in percent.
    #[arg(long)]
    pub base_rate: Decimal,

    /// Dismantling category (A, B, C or D).
    #[arg(long)]
    pub category: String,

    /// Destination is a Least Developed Country.
    #[arg(long)]
    pub ldc: bool,

    /// First year of the projection.
    #[arg(long, default_value_t = AFCFTA_EPOCH_YEAR)]
    pub from: i32,

    /// Last year of the projection.
    #[arg(long, default_value_t = AFCFTA_EPOCH_YEAR + 13)]
    pub to: i32,
}

#[derive(Serialize)]
struct Projection<'a> {
    base_rate: Decimal,
    schedule: &'a PhaseOutSchedule,
    points: &'a [PhaseOutPoint],
}

/// Execute the schedule subcommand.
pub fn run_schedule(args: &ScheduleArgs, ctx: &EngineContext) -> Result<u8> {
    anyhow::ensure!(
        args.base_rate >= Decimal::ZERO,
        "--base-rate must not be negative, got {}",
        args.base_rate
    );
    let schedule = PhaseOutSchedule::from_category_text(&args.category, args.ldc);
    if let Some(anomaly) = schedule.anomaly() {
        tracing::warn!(category = %args.category, ldc = args.ldc, "{anomaly}");
    }
    let points = schedule
        .project(
            args.base_rate,
            ReferenceYear::new(args.from),
            ReferenceYear::new(args.to),
        )
        .context("cannot project phase-out schedule")?;

    match ctx.format {
        OutputFormat::Json => print_json(&Projection {
            base_rate: args.base_rate,
            schedule: &schedule,
            points: &points,
        })?,
        OutputFormat::Table => {
            println!(
                "Category {} from {} (LDC: {})",
                args.category.trim().to_ascii_uppercase(),
                pct(args.base_rate),
                if args.ldc { "yes" } else { "no" }
            );
            if let Some(anomaly) = schedule.anomaly() {
                println!("Note: {anomaly}");
            }
            println!("  {:<6} {:>7} {:>10}", "Year", "Elapsed", "Rate");
            for point in &points {
                println!(
                    "  {:<6} {:>7} {:>10}",
                    point.year,
                    point.years_elapsed,
                    pct(point.rate)
                );
            }
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn args(category: &str, from: i32, to: i32) -> ScheduleArgs {
        ScheduleArgs {
            base_rate: dec!(15),
            category: category.to_string(),
            ldc: false,
            from,
            to,
        }
    }

    #[test]
    fn projection_prints() {
        let ctx = EngineContext::builtin(OutputFormat::Table);
        assert_eq!(run_schedule(&args("c", 2021, 2032), &ctx).unwrap(), 0);
        assert_eq!(run_schedule(&args("D", 2021, 2022), &ctx).unwrap(), 0);
    }

    #[test]
    fn inverted_range_fails() {
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let err = run_schedule(&args("B", 2030, 2020), &ctx).unwrap_err();
        assert!(format!("{err:#}").contains("2030"));
    }

    #[test]
    fn unbounded_range_is_rejected() {
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let err = run_schedule(&args("B", i32::MIN, i32::MAX), &ctx).unwrap_err();
        assert!(format!("{err:#}").contains("span exceeds"));
    }

    #[test]
    fn negative_base_rate_fails() {
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let mut a = args("B", 2021, 2022);
        a.base_rate = dec!(-1);
        assert!(run_schedule(&a, &ctx).is_err());
    }
}
