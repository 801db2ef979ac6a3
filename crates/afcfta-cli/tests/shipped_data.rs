//! Handlers over the repository's shipped reference data.

use std::path::PathBuf;

use afcfta_cli::context::EngineContext;
use afcfta_cli::opportunities::{run_opportunities, OpportunitiesArgs};
use afcfta_cli::output::OutputFormat;
use afcfta_cli::quote::{run_quote, QuoteArgs};
use afcfta_cli::score::{run_score, ScoreArgs};
use rust_decimal_macros::dec;

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("crate lives two levels below the repo root")
}

fn ctx(format: OutputFormat) -> EngineContext {
    EngineContext::load(None, None, &repo_root(), format).unwrap()
}

#[test]
fn shipped_file_is_picked_up_by_default() {
    assert_eq!(ctx(OutputFormat::Json).data.country_count(), 15);
}

#[test]
fn quote_score_and_rank_with_shipped_profiles() {
    let ctx = ctx(OutputFormat::Json);
    let quote = QuoteArgs {
        code: "6109.10".to_string(),
        origin: "KEN".to_string(),
        destination: "TZA".to_string(),
        value: dec!(25000),
        category: Some("D".to_string()),
        year: Some(2026),
    };
    assert_eq!(run_quote(&quote, &ctx).unwrap(), 0);

    let score = ScoreArgs {
        origin: "KEN".to_string(),
        destination: "RWA".to_string(),
        bilateral_volume: None,
    };
    assert_eq!(run_score(&score, &ctx).unwrap(), 0);

    let opportunities = OpportunitiesArgs {
        origin: "ZAF".to_string(),
        sector: Some("87".to_string()),
        limit: Some(5),
    };
    assert_eq!(run_opportunities(&opportunities, &ctx).unwrap(), 0);
}

#[test]
fn config_pointing_at_missing_data_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("afcfta.yaml");
    std::fs::write(&config, "data: does/not/exist.yaml\n").unwrap();
    let err = EngineContext::load(Some(&config), None, dir.path(), OutputFormat::Table).unwrap_err();
    assert!(format!("{err:#}").contains("does/not/exist.yaml"));
}
