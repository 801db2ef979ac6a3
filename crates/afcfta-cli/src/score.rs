//! # Score CLI — ICP score for an origin/destination pair.
//!
//! ```bash
//! afcfta score --origin GHA --dest NGA
//! afcfta score --origin KEN --dest TZA --bilateral-volume 1200000000
//! ```

use anyhow::Result;
use clap::Args;

use afcfta_core::{Country, CountryCode, ReferenceDataProvider};
use afcfta_pack::ReferenceData;
use afcfta_scoring::{score, IcpScoreResult};

use crate::context::EngineContext;
use crate::output::{print_json, OutputFormat};

/// Score subcommand arguments.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Exporting country (ISO alpha-3).
    #[arg(long)]
    pub origin: String,

    /// Destination market (ISO alpha-3).
    #[arg(long = "dest")]
    pub destination: String,

    /// Observed bilateral trade volume in USD.
    #[arg(long)]
    pub bilateral_volume: Option<f64>,
}

/// Profile for a user-supplied code, or an error naming the flag.
pub(crate) fn profile<'a>(
    data: &'a ReferenceData,
    raw: &str,
    field: &'static str,
) -> Result<&'a Country> {
    let code = CountryCode::parse_field(raw, field)?;
    data.country(&code).ok_or_else(|| {
        anyhow::anyhow!(
            "no country profile for {code} (--{field}); {} profile(s) loaded, pass --data to add more",
            data.country_count()
        )
    })
}

/// Execute the score subcommand.
pub fn run_score(args: &ScoreArgs, ctx: &EngineContext) -> Result<u8> {
    if let Some(volume) = args.bilateral_volume {
        anyhow::ensure!(
            volume.is_finite() && volume >= 0.0,
            "--bilateral-volume must be a non-negative number, got {volume}"
        );
    }
    let origin = profile(&ctx.data, &args.origin, "origin")?;
    let destination = profile(&ctx.data, &args.destination, "dest")?;
    let result = score(origin, destination, args.bilateral_volume);

    match ctx.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => print_score(origin, destination, &result),
    }
    Ok(0)
}

fn print_score(origin: &Country, destination: &Country, result: &IcpScoreResult) {
    println!(
        "ICP score {} → {}: {:.2} ({})",
        origin.name, destination.name, result.composite_score, result.rating
    );
    for (component, value) in &result.components {
        println!(
            "  {:<22} {:>6.2}  (weight {:.2})",
            component.as_str(),
            value,
            component.weight()
        );
    }
    println!();
    for recommendation in &result.recommendations {
        println!("  - {recommendation}");
    }
}

#[cfg(test)]
mod tests {
    use afcfta_core::{Region, RegionalBloc, RiskLevel};
    use afcfta_pack::ReferenceDataFile;

    use super::*;

    fn country(code: &str) -> Country {
        Country {
            code: CountryCode::new(code).unwrap(),
            name: code.to_string(),
            region: Region::West,
            population: 30_000_000,
            gdp_billion_usd: 75.0,
            gdp_per_capita_usd: 2_300.0,
            infrastructure_index: Some(55.0),
            risk: RiskLevel::Moderate,
            business_rank_africa: Some(11),
            is_ldc: false,
            regional_blocs: vec![RegionalBloc::Ecowas],
        }
    }

    fn ctx(format: OutputFormat) -> EngineContext {
        let data = ReferenceData::builtin()
            .with_overlay(ReferenceDataFile {
                countries: vec![country("GHA"), country("NGA")],
                ..ReferenceDataFile::default()
            })
            .unwrap();
        EngineContext::builtin(format).with_data(data)
    }

    fn args(origin: &str, dest: &str, volume: Option<f64>) -> ScoreArgs {
        ScoreArgs {
            origin: origin.to_string(),
            destination: dest.to_string(),
            bilateral_volume: volume,
        }
    }

    #[test]
    fn scores_known_pair() {
        assert_eq!(run_score(&args("GHA", "NGA", None), &ctx(OutputFormat::Table)).unwrap(), 0);
        assert_eq!(
            run_score(&args("gha", "nga", Some(1.0e9)), &ctx(OutputFormat::Json)).unwrap(),
            0
        );
    }

    #[test]
    fn unknown_destination_is_an_error() {
        let err = run_score(&args("GHA", "KEN", None), &ctx(OutputFormat::Json)).unwrap_err();
        assert!(err.to_string().contains("no country profile for KEN"));
    }

    #[test]
    fn negative_volume_is_rejected() {
        let err = run_score(&args("GHA", "NGA", Some(-5.0)), &ctx(OutputFormat::Json)).unwrap_err();
        assert!(err.to_string().contains("--bilateral-volume"));
    }
}
