//! # afcfta CLI entry point
//!
//! Parses command-line arguments, loads configuration and reference data
//! once, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use afcfta_cli::cascade::{run_cascade, CascadeArgs};
use afcfta_cli::context::EngineContext;
use afcfta_cli::opportunities::{run_opportunities, OpportunitiesArgs};
use afcfta_cli::output::OutputFormat;
use afcfta_cli::quote::{run_quote, QuoteArgs};
use afcfta_cli::schedule::{run_schedule, ScheduleArgs};
use afcfta_cli::score::{run_score, ScoreArgs};
use afcfta_cli::sectors::{run_sectors, SectorsArgs};
use afcfta_cli::trade_creation::{run_trade_creation, TradeCreationArgs};
use afcfta_cli::DEFAULT_DATA_FILE;

/// AfCFTA tariff engine
///
/// Compares MFN and AfCFTA preferential duties with the full levy/VAT
/// cascade, projects phase-out schedules, and scores destination markets.
#[derive(Parser, Debug)]
#[command(name = "afcfta", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the engine configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Country reference data file (YAML).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare MFN and AfCFTA treatment of one consignment.
    Quote(QuoteArgs),

    /// Show the levy/VAT cascade for a destination.
    Cascade(CascadeArgs),

    /// Project a phase-out schedule year by year.
    Schedule(ScheduleArgs),

    /// Score a destination market (ICP).
    Score(ScoreArgs),

    /// Rank destination markets for an exporter.
    Opportunities(OpportunitiesArgs),

    /// Estimate import growth from a tariff cut.
    TradeCreation(TradeCreationArgs),

    /// List the HS chapter table.
    Sectors(SectorsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so JSON on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("afcfta CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let repo_root = resolve_repo_root().unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });
    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let ctx = match EngineContext::load(
        cli.config.as_deref(),
        cli.data.as_deref(),
        &repo_root,
        cli.format,
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Quote(args) => run_quote(&args, &ctx),
        Commands::Cascade(args) => run_cascade(&args, &ctx),
        Commands::Schedule(args) => run_schedule(&args, &ctx),
        Commands::Score(args) => run_score(&args, &ctx),
        Commands::Opportunities(args) => run_opportunities(&args, &ctx),
        Commands::TradeCreation(args) => run_trade_creation(&args, &ctx),
        Commands::Sectors(args) => run_sectors(&args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Walk up from the current directory to the first one containing the
/// shipped country reference file.
fn resolve_repo_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        if dir.join(DEFAULT_DATA_FILE).is_file() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn cli_parse_quote() {
        let cli = Cli::try_parse_from([
            "afcfta", "quote", "--code", "0101.21", "--origin", "GHA", "--dest", "KEN", "--value",
            "100000", "--year", "2025",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
        if let Commands::Quote(args) = cli.command {
            assert_eq!(args.code, "0101.21");
            assert_eq!(args.destination, "KEN");
            assert_eq!(args.value, dec!(100000));
            assert_eq!(args.year, Some(2025));
            assert!(args.category.is_none());
        } else {
            panic!("expected quote");
        }
    }

    #[test]
    fn cli_parse_quote_requires_value() {
        assert!(Cli::try_parse_from([
            "afcfta", "quote", "--code", "010121", "--origin", "GHA", "--dest", "KEN"
        ])
        .is_err());
    }

    #[test]
    fn cli_parse_rejects_non_decimal_value() {
        assert!(Cli::try_parse_from([
            "afcfta", "quote", "--code", "010121", "--origin", "GHA", "--dest", "KEN", "--value",
            "lots"
        ])
        .is_err());
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "afcfta", "sectors", "--format", "json", "-vv", "--data", "extra.yaml",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data, Some(PathBuf::from("extra.yaml")));
        assert!(matches!(cli.command, Commands::Sectors(_)));
    }

    #[test]
    fn cli_parse_cascade_duty_defaults_to_zero() {
        let cli = Cli::try_parse_from([
            "afcfta", "cascade", "--value", "5000", "--country", "NGA",
        ])
        .unwrap();
        if let Commands::Cascade(args) = cli.command {
            assert_eq!(args.duty, dec!(0));
            assert!(args.sector.is_none());
        } else {
            panic!("expected cascade");
        }
    }

    #[test]
    fn cli_parse_schedule_defaults_span_thirteen_years() {
        let cli = Cli::try_parse_from([
            "afcfta", "schedule", "--base-rate", "15", "--category", "C",
        ])
        .unwrap();
        if let Commands::Schedule(args) = cli.command {
            assert_eq!(args.from, 2021);
            assert_eq!(args.to, 2034);
            assert!(!args.ldc);
        } else {
            panic!("expected schedule");
        }
    }

    #[test]
    fn cli_parse_trade_creation_uses_kebab_case() {
        let cli = Cli::try_parse_from([
            "afcfta", "trade-creation", "--mfn-rate", "15", "--afcfta-rate", "9",
        ])
        .unwrap();
        if let Commands::TradeCreation(args) = cli.command {
            assert_eq!(args.mfn_rate, dec!(15));
            assert!(args.elasticity.is_none());
        } else {
            panic!("expected trade-creation");
        }
    }

    #[test]
    fn cli_parse_score_and_opportunities() {
        let cli = Cli::try_parse_from([
            "afcfta", "score", "--origin", "GHA", "--dest", "NGA", "--bilateral-volume", "1e9",
        ])
        .unwrap();
        if let Commands::Score(args) = cli.command {
            assert_eq!(args.bilateral_volume, Some(1.0e9));
        } else {
            panic!("expected score");
        }
        let cli = Cli::try_parse_from([
            "afcfta", "opportunities", "--origin", "KEN", "--sector", "87", "--limit", "5",
        ])
        .unwrap();
        if let Commands::Opportunities(args) = cli.command {
            assert_eq!(args.limit, Some(5));
            assert_eq!(args.sector.as_deref(), Some("87"));
        } else {
            panic!("expected opportunities");
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["afcfta", "--format", "xml", "sectors"]).is_err());
    }
}
