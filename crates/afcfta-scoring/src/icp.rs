//! # ICP Scorer
//!
//! Investment Climate & Potential of a destination market for an exporter
//! in `origin`. Eight components, each normalized to [0, 100] and weighted:
//!
//! | Component | Weight | Input |
//! |-----------|--------|-------|
//! | market size | 0.15 | destination GDP / $1T |
//! | income level | 0.10 | GDP per capita / $20k |
//! | trade volume | 0.15 | bilateral volume / $10B, else 0.3 × market size |
//! | infrastructure | 0.15 | published index, else 50 |
//! | business environment | 0.15 | 100 − 2 × African rank, else 50 |
//! | regional integration | 0.10 | 50 + min(50, 20 × shared blocs) |
//! | market access | 0.10 | 70 |
//! | political stability | 0.10 | risk label |
//!
//! The weights sum to 1, so the composite is itself in [0, 100].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use afcfta_core::{Country, RiskLevel};

use crate::{bounded, round_score};

/// Bilateral trade volume (USD) that scores 100.
const TRADE_VOLUME_CEILING_USD: f64 = 10_000_000_000.0;
/// Destination GDP (billion USD) that scores 100.
const MARKET_SIZE_CEILING_BN: f64 = 1_000.0;
/// GDP per capita (USD) that scores 100.
const INCOME_CEILING_USD: f64 = 20_000.0;
/// Neutral score for unpublished inputs.
const NEUTRAL: f64 = 50.0;
/// AfCFTA tariff access is the same for every state party.
const MARKET_ACCESS: f64 = 70.0;

/// One scored dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IcpComponent {
    MarketSize,
    IncomeLevel,
    TradeVolume,
    Infrastructure,
    BusinessEnvironment,
    RegionalIntegration,
    MarketAccess,
    PoliticalStability,
}

impl IcpComponent {
    /// Every component, in report order.
    pub const ALL: [IcpComponent; 8] = [
        IcpComponent::MarketSize,
        IcpComponent::IncomeLevel,
        IcpComponent::TradeVolume,
        IcpComponent::Infrastructure,
        IcpComponent::BusinessEnvironment,
        IcpComponent::RegionalIntegration,
        IcpComponent::MarketAccess,
        IcpComponent::PoliticalStability,
    ];

    /// Share of the composite.
    pub fn weight(&self) -> f64 {
        match self {
            Self::MarketSize
            | Self::TradeVolume
            | Self::Infrastructure
            | Self::BusinessEnvironment => 0.15,
            Self::IncomeLevel
            | Self::RegionalIntegration
            | Self::MarketAccess
            | Self::PoliticalStability => 0.10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketSize => "market_size",
            Self::IncomeLevel => "income_level",
            Self::TradeVolume => "trade_volume",
            Self::Infrastructure => "infrastructure",
            Self::BusinessEnvironment => "business_environment",
            Self::RegionalIntegration => "regional_integration",
            Self::MarketAccess => "market_access",
            Self::PoliticalStability => "political_stability",
        }
    }
}

impl std::fmt::Display for IcpComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IcpRating {
    Excellent,
    VeryGood,
    Good,
    Moderate,
    Fair,
    Limited,
}

impl IcpRating {
    /// Band for a composite: ≥80, ≥70, ≥60, ≥50, ≥40, below.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => Self::Excellent,
            s if s >= 70.0 => Self::VeryGood,
            s if s >= 60.0 => Self::Good,
            s if s >= 50.0 => Self::Moderate,
            s if s >= 40.0 => Self::Fair,
            _ => Self::Limited,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Fair => "Fair",
            Self::Limited => "Limited",
        }
    }
}

impl std::fmt::Display for IcpRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcpScoreResult {
    pub composite_score: f64,
    pub components: BTreeMap<IcpComponent, f64>,
    pub rating: IcpRating,
    pub recommendations: Vec<String>,
}

impl IcpScoreResult {
    /// Score of one component.
    pub fn component(&self, component: IcpComponent) -> f64 {
        self.components.get(&component).copied().unwrap_or_default()
    }
}

fn political_stability(risk: RiskLevel) -> f64 {
    match risk {
        RiskLevel::Low => 85.0,
        RiskLevel::Moderate => 65.0,
        RiskLevel::High => 40.0,
        RiskLevel::VeryHigh => 20.0,
        RiskLevel::Unknown => NEUTRAL,
    }
}

fn component_score(
    component: IcpComponent,
    origin: &Country,
    destination: &Country,
    bilateral_volume_usd: Option<f64>,
) -> f64 {
    let market_size = || destination.gdp_billion_usd / MARKET_SIZE_CEILING_BN * 100.0;
    let raw = match component {
        IcpComponent::MarketSize => market_size(),
        IcpComponent::IncomeLevel => destination.gdp_per_capita_usd / INCOME_CEILING_USD * 100.0,
        IcpComponent::TradeVolume => match bilateral_volume_usd.filter(|v| v.is_finite()) {
            Some(volume) => volume / TRADE_VOLUME_CEILING_USD * 100.0,
            None => 0.3 * bounded(market_size()),
        },
        IcpComponent::Infrastructure => destination.infrastructure_index.unwrap_or(NEUTRAL),
        IcpComponent::BusinessEnvironment => destination
            .business_rank_africa
            .map_or(NEUTRAL, |rank| (100.0 - 2.0 * f64::from(rank)).max(0.0)),
        IcpComponent::RegionalIntegration => {
            let shared = origin.shared_blocs(destination).len() as f64;
            NEUTRAL + (20.0 * shared).min(50.0)
        }
        IcpComponent::MarketAccess => MARKET_ACCESS,
        IcpComponent::PoliticalStability => political_stability(destination.risk),
    };
    round_score(bounded(raw))
}

/// Fixed-order advice derived from the component scores.
fn recommendations(components: &BTreeMap<IcpComponent, f64>) -> Vec<String> {
    let at = |c: IcpComponent| components.get(&c).copied().unwrap_or_default();
    let rules: [(bool, &str); 8] = [
        (
            at(IcpComponent::MarketSize) >= 30.0,
            "Large consumer market: plan for direct distribution and local partners",
        ),
        (
            at(IcpComponent::MarketSize) < 5.0,
            "Small domestic market: treat as a gateway to its regional bloc rather than a standalone target",
        ),
        (
            at(IcpComponent::IncomeLevel) < 15.0,
            "Price-sensitive buyers: lead with value product lines",
        ),
        (
            at(IcpComponent::TradeVolume) < 10.0,
            "Thin bilateral trade: start with trade missions and distributor discovery",
        ),
        (
            at(IcpComponent::Infrastructure) < 50.0,
            "Logistics constraints: budget for freight forwarding and bonded warehousing",
        ),
        (
            at(IcpComponent::BusinessEnvironment) < 50.0,
            "Complex business environment: engage local customs brokers and legal counsel",
        ),
        (
            at(IcpComponent::RegionalIntegration) >= 80.0,
            "Shared bloc membership: rules of origin and transit facilitation are already aligned",
        ),
        (
            at(IcpComponent::PoliticalStability) < 50.0,
            "Elevated political risk: consider political risk insurance and staged commitments",
        ),
    ];
    let advice: Vec<String> = rules
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, text)| text.to_string())
        .collect();
    if advice.is_empty() {
        vec!["Balanced profile: proceed with standard market entry planning".to_string()]
    } else {
        advice
    }
}

/// Score `destination` as a market for exporters in `origin`.
pub fn score(
    origin: &Country,
    destination: &Country,
    bilateral_volume_usd: Option<f64>,
) -> IcpScoreResult {
    let components: BTreeMap<IcpComponent, f64> = IcpComponent::ALL
        .iter()
        .map(|&c| (c, component_score(c, origin, destination, bilateral_volume_usd)))
        .collect();
    let composite = components
        .iter()
        .map(|(component, value)| component.weight() * value)
        .sum::<f64>();
    let composite_score = round_score(bounded(composite));
    let rating = IcpRating::from_score(composite_score);

    tracing::debug!(
        origin = %origin.code, destination = %destination.code,
        composite_score, %rating, "ICP score computed"
    );

    IcpScoreResult {
        composite_score,
        recommendations: recommendations(&components),
        components,
        rating,
    }
}

#[cfg(test)]
mod tests {
    use afcfta_core::{CountryCode, Region, RegionalBloc};

    use super::*;

    fn profile(code: &str, blocs: Vec<RegionalBloc>) -> Country {
        Country {
            code: CountryCode::new(code).unwrap(),
            name: code.to_string(),
            region: Region::West,
            population: 20_000_000,
            gdp_billion_usd: 200.0,
            gdp_per_capita_usd: 4_000.0,
            infrastructure_index: Some(60.0),
            risk: RiskLevel::Moderate,
            business_rank_africa: Some(10),
            is_ldc: false,
            regional_blocs: blocs,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = IcpComponent::ALL.iter().map(IcpComponent::weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn two_shared_blocs_score_ninety() {
        let origin = profile("GHA", vec![RegionalBloc::Ecowas, RegionalBloc::Censad]);
        let dest = profile("NGA", vec![RegionalBloc::Ecowas, RegionalBloc::Censad]);
        let result = score(&origin, &dest, None);
        assert_eq!(result.component(IcpComponent::RegionalIntegration), 90.0);
    }

    #[test]
    fn regional_integration_saturates_at_hundred() {
        let blocs = vec![
            RegionalBloc::Ecowas,
            RegionalBloc::Waemu,
            RegionalBloc::Censad,
        ];
        let result = score(&profile("CIV", blocs.clone()), &profile("SEN", blocs), None);
        assert_eq!(result.component(IcpComponent::RegionalIntegration), 100.0);
        let none = score(&profile("CIV", vec![]), &profile("SEN", vec![]), None);
        assert_eq!(none.component(IcpComponent::RegionalIntegration), 50.0);
    }

    #[test]
    fn component_values_follow_their_formulas() {
        let origin = profile("GHA", vec![]);
        let dest = profile("NGA", vec![]);
        let result = score(&origin, &dest, None);
        assert_eq!(result.component(IcpComponent::MarketSize), 20.0);
        assert_eq!(result.component(IcpComponent::IncomeLevel), 20.0);
        assert_eq!(result.component(IcpComponent::TradeVolume), 6.0);
        assert_eq!(result.component(IcpComponent::Infrastructure), 60.0);
        assert_eq!(result.component(IcpComponent::BusinessEnvironment), 80.0);
        assert_eq!(result.component(IcpComponent::MarketAccess), 70.0);
        assert_eq!(result.component(IcpComponent::PoliticalStability), 65.0);
        // 3 + 2 + 0.9 + 9 + 12 + 5 + 7 + 6.5
        assert_eq!(result.composite_score, 45.4);
        assert_eq!(result.rating, IcpRating::Fair);
    }

    #[test]
    fn bilateral_volume_overrides_proxy_and_clamps() {
        let origin = profile("GHA", vec![]);
        let dest = profile("NGA", vec![]);
        let result = score(&origin, &dest, Some(2_500_000_000.0));
        assert_eq!(result.component(IcpComponent::TradeVolume), 25.0);
        let result = score(&origin, &dest, Some(50_000_000_000.0));
        assert_eq!(result.component(IcpComponent::TradeVolume), 100.0);
    }

    #[test]
    fn unpublished_inputs_score_neutral() {
        let mut dest = profile("NGA", vec![]);
        dest.infrastructure_index = None;
        dest.business_rank_africa = None;
        dest.risk = RiskLevel::Unknown;
        let result = score(&profile("GHA", vec![]), &dest, None);
        assert_eq!(result.component(IcpComponent::Infrastructure), 50.0);
        assert_eq!(result.component(IcpComponent::BusinessEnvironment), 50.0);
        assert_eq!(result.component(IcpComponent::PoliticalStability), 50.0);
    }

    #[test]
    fn poorly_ranked_economy_floors_at_zero() {
        let mut dest = profile("NGA", vec![]);
        dest.business_rank_africa = Some(54);
        let result = score(&profile("GHA", vec![]), &dest, None);
        assert_eq!(result.component(IcpComponent::BusinessEnvironment), 0.0);
    }

    #[test]
    fn rating_bands_are_contiguous() {
        assert_eq!(IcpRating::from_score(100.0), IcpRating::Excellent);
        assert_eq!(IcpRating::from_score(80.0), IcpRating::Excellent);
        assert_eq!(IcpRating::from_score(79.99), IcpRating::VeryGood);
        assert_eq!(IcpRating::from_score(70.0), IcpRating::VeryGood);
        assert_eq!(IcpRating::from_score(60.0), IcpRating::Good);
        assert_eq!(IcpRating::from_score(50.0), IcpRating::Moderate);
        assert_eq!(IcpRating::from_score(40.0), IcpRating::Fair);
        assert_eq!(IcpRating::from_score(39.99), IcpRating::Limited);
        assert_eq!(IcpRating::from_score(0.0), IcpRating::Limited);
    }

    #[test]
    fn recommendations_keep_rule_order() {
        let mut dest = profile("NGA", vec![]);
        dest.risk = RiskLevel::VeryHigh;
        dest.infrastructure_index = Some(30.0);
        let result = score(&profile("GHA", vec![]), &dest, None);
        let logistics = result
            .recommendations
            .iter()
            .position(|r| r.starts_with("Logistics"))
            .unwrap();
        let risk = result
            .recommendations
            .iter()
            .position(|r| r.starts_with("Elevated political risk"))
            .unwrap();
        assert!(logistics < risk);
    }

    #[test]
    fn components_serialize_by_name() {
        let result = score(&profile("GHA", vec![]), &profile("NGA", vec![]), None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["components"]["market_access"], 70.0);
        assert_eq!(json["rating"], "fair");
    }
}
