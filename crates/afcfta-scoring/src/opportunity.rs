//! # Trade Opportunity Analyzer
//!
//! Ranks destination markets for an exporter and estimates how much trade
//! a tariff cut creates.
//!
//! Opportunity score, on a 0–100 scale:
//!
//! ```text
//! 30 × min(1, GDP / $1T)
//! + 20 × min(1, population / 100M)
//! + 25 if same region, else 10
//! + 20
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use afcfta_core::{
    Country, CountryCode, EngineError, EngineResult, ReferenceDataProvider, Region, RegionalBloc,
    SectorCode, SectorInfo,
};

use crate::round_score;

/// Import-demand elasticity used when the caller does not supply one.
pub const DEFAULT_ELASTICITY: Decimal = dec!(1.5);

const GDP_CEILING_BN: f64 = 1_000.0;
const POPULATION_CEILING: f64 = 100_000_000.0;

/// One ranked destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOpportunity {
    pub country: CountryCode,
    pub name: String,
    pub region: Region,
    pub score: f64,
    pub same_region: bool,
    pub shared_blocs: Vec<RegionalBloc>,
    /// Sector the ranking was requested for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<SectorInfo>,
}

fn opportunity_score(origin: &Country, candidate: &Country) -> f64 {
    let gdp = (candidate.gdp_billion_usd / GDP_CEILING_BN).clamp(0.0, 1.0);
    let population = (candidate.population as f64 / POPULATION_CEILING).min(1.0);
    let proximity = if origin.same_region(candidate) { 0.25 } else { 0.10 };
    round_score((0.30 * gdp + 0.20 * population + proximity + 0.20) * 100.0)
}

/// Rank `candidates` as export markets for `origin`, best first.
///
/// The origin itself is skipped. Ties keep their input order.
pub fn rank_opportunities(
    origin: &Country,
    candidates: &[&Country],
    sector: Option<&SectorInfo>,
) -> Vec<TradeOpportunity> {
    let mut ranked: Vec<TradeOpportunity> = candidates
        .iter()
        .filter(|c| c.code != origin.code)
        .map(|candidate| TradeOpportunity {
            country: candidate.code.clone(),
            name: candidate.name.clone(),
            region: candidate.region,
            score: opportunity_score(origin, candidate),
            same_region: origin.same_region(candidate),
            shared_blocs: origin.shared_blocs(candidate),
            sector: sector.cloned(),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Rank every profile in `reference` for `origin`.
///
/// # Errors
///
/// - [`EngineError::InvalidCountryCode`] when `origin` has no profile.
/// - [`EngineError::UnknownSector`] when the sector filter is not in the
///   sector table.
pub fn rank_opportunities_for(
    origin: &CountryCode,
    reference: &dyn ReferenceDataProvider,
    sector: Option<&SectorCode>,
) -> EngineResult<Vec<TradeOpportunity>> {
    let origin = reference
        .country(origin)
        .ok_or_else(|| EngineError::InvalidCountryCode {
            field: "origin",
            value: origin.to_string(),
            reason: "no country profile in reference data".to_string(),
        })?;
    let sector = sector
        .map(|code| {
            reference
                .sector_info(code)
                .ok_or_else(|| EngineError::UnknownSector {
                    field: "sector",
                    sector: code.to_string(),
                })
        })
        .transpose()?;
    Ok(rank_opportunities(origin, &reference.countries(), sector))
}

/// Qualitative band of a trade-creation estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeCreationLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
    Minimal,
}

impl TradeCreationLevel {
    /// Band for an increase: >20, >10, >5, >0, otherwise minimal.
    pub fn from_increase(increase_pct: Decimal) -> Self {
        if increase_pct > dec!(20) {
            Self::VeryHigh
        } else if increase_pct > dec!(10) {
            Self::High
        } else if increase_pct > dec!(5) {
            Self::Moderate
        } else if increase_pct > Decimal::ZERO {
            Self::Low
        } else {
            Self::Minimal
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very high trade creation potential",
            Self::High => "High trade creation potential",
            Self::Moderate => "Moderate trade creation potential",
            Self::Low => "Low trade creation potential",
            Self::Minimal => "Minimal trade creation potential",
        }
    }
}

impl std::fmt::Display for TradeCreationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeCreationEstimate {
    /// Tariff cut in percentage points.
    pub reduction_pct: Decimal,
    /// Expected rise in import volume, percent.
    pub increase_pct: Decimal,
    pub interpretation: TradeCreationLevel,
}

/// Expected import growth from cutting `mfn_rate` to `afcfta_rate`.
///
/// # Errors
///
/// [`EngineError::InvalidRate`] for a negative rate or elasticity, or when
/// the estimate overflows.
pub fn estimate_trade_creation(
    mfn_rate: Decimal,
    afcfta_rate: Decimal,
    elasticity: Decimal,
) -> EngineResult<TradeCreationEstimate> {
    for (field, value) in [
        ("mfn_rate", mfn_rate),
        ("afcfta_rate", afcfta_rate),
        ("elasticity", elasticity),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field,
                value: value.to_string(),
                reason: "must not be negative".to_string(),
            });
        }
    }
    let reduction_pct = mfn_rate - afcfta_rate;
    let increase_pct = elasticity
        .checked_mul(reduction_pct)
        .ok_or_else(|| EngineError::InvalidRate {
            field: "mfn_rate",
            value: mfn_rate.to_string(),
            reason: format!("tariff cut times elasticity {elasticity} overflows decimal range"),
        })?
        .round_dp(2);
    Ok(TradeCreationEstimate {
        reduction_pct,
        increase_pct,
        interpretation: TradeCreationLevel::from_increase(increase_pct),
    })
}
