//! # Cascade CLI — levy/VAT journal for one destination.
//!
//! ```bash
//! afcfta cascade --value 100000 --duty 9000 --country NGA
//! afcfta cascade --value 100000 --duty 9000 --country KEN --sector 22
//! ```

use anyhow::{Context, Result};
use clap::Args;
use rust_decimal::Decimal;

use afcfta_core::{CountryCode, SectorCode};

use crate::context::EngineContext;
use crate::output::{print_json, OutputFormat};
use crate::quote::print_cascade;

/// Cascade subcommand arguments.
#[derive(Args, Debug)]
pub struct CascadeArgs {
    /// Merchandise (customs) value.
    #[arg(long)]
    pub value: Decimal,

    /// Customs duty amount already owed.
    #[arg(long, default_value = "0")]
    pub duty: Decimal,

    /// Importing country (ISO alpha-3).
    #[arg(long)]
    pub country: String,

    /// Two-digit HS chapter, for sector-specific excise.
    #[arg(long)]
    pub sector: Option<String>,
}

/// Execute the cascade subcommand.
pub fn run_cascade(args: &CascadeArgs, ctx: &EngineContext) -> Result<u8> {
    let country = CountryCode::parse_field(args.country.as_str(), "country")?;
    let sector = args
        .sector
        .as_deref()
        .map(|s| SectorCode::parse_field(s, "sector"))
        .transpose()?;
    let result = ctx
        .calculator()
        .cascade(args.value, args.duty, &country, sector.as_ref())
        .with_context(|| format!("cannot compute levy cascade for {country}"))?;

    match ctx.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => {
            println!("Levy cascade for {country}:");
            print_cascade(&result);
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn args(value: Decimal, country: &str) -> CascadeArgs {
        CascadeArgs {
            value,
            duty: dec!(9000),
            country: country.to_string(),
            sector: None,
        }
    }

    #[test]
    fn cascade_runs_for_known_and_unknown_countries() {
        let ctx = EngineContext::builtin(OutputFormat::Table);
        assert_eq!(run_cascade(&args(dec!(100000), "NGA"), &ctx).unwrap(), 0);
        assert_eq!(run_cascade(&args(dec!(100000), "BWA"), &ctx).unwrap(), 0);
    }

    #[test]
    fn non_positive_value_fails() {
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let err = run_cascade(&args(Decimal::ZERO, "NGA"), &ctx).unwrap_err();
        assert!(format!("{err:#}").contains("must be at least 0.01"));
    }

    #[test]
    fn value_outside_configured_bounds_fails() {
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let mut sub_cent = args(dec!(0.001), "NGA");
        sub_cent.duty = Decimal::ZERO;
        assert!(run_cascade(&sub_cent, &ctx).is_err());

        let err = run_cascade(&args(dec!(5000000000000000000000000000), "NGA"), &ctx).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds maximum"));
    }

    #[test]
    fn malformed_country_names_the_flag() {
        let ctx = EngineContext::builtin(OutputFormat::Json);
        let err = run_cascade(&args(dec!(1), "NG"), &ctx).unwrap_err();
        assert!(err.to_string().contains("`country`"));
    }
}
