//! # Country Reference Entities
//!
//! [`Country`] is the read-only profile the engine receives from the
//! reference store. The engine never mutates one; it borrows profiles for
//! the duration of a single call.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identity::CountryCode;

/// African Union geographic region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// North Africa.
    North,
    /// West Africa.
    West,
    /// Central Africa.
    Central,
    /// East Africa.
    East,
    /// Southern Africa.
    Southern,
}

impl Region {
    /// Snake-case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::West => "west",
            Self::Central => "central",
            Self::East => "east",
            Self::Southern => "southern",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regional economic community or customs union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionalBloc {
    /// Economic Community of West African States.
    Ecowas,
    /// West African Economic and Monetary Union (UEMOA).
    Waemu,
    /// East African Community.
    Eac,
    /// Southern African Development Community.
    Sadc,
    /// Southern African Customs Union.
    Sacu,
    /// Common Market for Eastern and Southern Africa.
    Comesa,
    /// Economic Community of Central African States.
    Eccas,
    /// Central African Economic and Monetary Community.
    Cemac,
    /// Arab Maghreb Union.
    Uma,
    /// Intergovernmental Authority on Development.
    Igad,
    /// Community of Sahel-Saharan States.
    Censad,
}

impl RegionalBloc {
    /// Upper-case acronym, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecowas => "ECOWAS",
            Self::Waemu => "WAEMU",
            Self::Eac => "EAC",
            Self::Sadc => "SADC",
            Self::Sacu => "SACU",
            Self::Comesa => "COMESA",
            Self::Eccas => "ECCAS",
            Self::Cemac => "CEMAC",
            Self::Uma => "UMA",
            Self::Igad => "IGAD",
            Self::Censad => "CENSAD",
        }
    }
}

impl std::fmt::Display for RegionalBloc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical political-risk label supplied by the reference store.
///
/// Labels the engine does not recognize deserialize to [`RiskLevel::Unknown`]
/// rather than failing the whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low political risk.
    Low,
    /// Moderate political risk.
    Moderate,
    /// High political risk.
    High,
    /// Very high political risk.
    VeryHigh,
    /// No usable label.
    #[default]
    Unknown,
}

impl RiskLevel {
    /// Snake-case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very_high",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = std::convert::Infallible;

    /// Lenient parse: case-insensitive, accepts `medium` for moderate and
    /// space or hyphen separators. Anything else is `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Ok(match normalized.as_str() {
            "low" => Self::Low,
            "moderate" | "medium" => Self::Moderate,
            "high" => Self::High,
            "very_high" => Self::VeryHigh,
            _ => Self::Unknown,
        })
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Economic profile of a country, as provided by the reference store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code.
    pub code: CountryCode,
    /// Display name.
    pub name: String,
    /// Geographic region.
    pub region: Region,
    /// Resident population.
    pub population: u64,
    /// Nominal GDP in billions of US dollars.
    pub gdp_billion_usd: f64,
    /// Nominal GDP per capita in US dollars.
    pub gdp_per_capita_usd: f64,
    /// Logistics/infrastructure index on a 0–100 scale, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_index: Option<f64>,
    /// Political-risk label.
    #[serde(default)]
    pub risk: RiskLevel,
    /// Business-environment rank among African economies (1 = best).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_rank_africa: Option<u32>,
    /// UN Least Developed Country classification.
    #[serde(default)]
    pub is_ldc: bool,
    /// Regional economic communities the country belongs to.
    #[serde(default)]
    pub regional_blocs: Vec<RegionalBloc>,
}

impl Country {
    /// Blocs both countries belong to, in this country's declared order.
    pub fn shared_blocs(&self, other: &Country) -> Vec<RegionalBloc> {
        self.regional_blocs
            .iter()
            .filter(|bloc| other.regional_blocs.contains(bloc))
            .copied()
            .collect()
    }

    /// Whether both countries sit in the same region.
    pub fn same_region(&self, other: &Country) -> bool {
        self.region == other.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(code: &str, region: Region, blocs: Vec<RegionalBloc>) -> Country {
        Country {
            code: CountryCode::new(code).unwrap(),
            name: code.to_string(),
            region,
            population: 1_000_000,
            gdp_billion_usd: 10.0,
            gdp_per_capita_usd: 1_000.0,
            infrastructure_index: None,
            risk: RiskLevel::Unknown,
            business_rank_africa: None,
            is_ldc: false,
            regional_blocs: blocs,
        }
    }

    #[test]
    fn shared_blocs_preserves_order() {
        let gha = profile("GHA", Region::West, vec![RegionalBloc::Ecowas, RegionalBloc::Censad]);
        let civ = profile(
            "CIV",
            Region::West,
            vec![RegionalBloc::Censad, RegionalBloc::Waemu, RegionalBloc::Ecowas],
        );
        assert_eq!(
            gha.shared_blocs(&civ),
            vec![RegionalBloc::Ecowas, RegionalBloc::Censad]
        );
        assert!(gha.same_region(&civ));
    }

    #[test]
    fn shared_blocs_empty_when_disjoint() {
        let ken = profile("KEN", Region::East, vec![RegionalBloc::Eac]);
        let zaf = profile("ZAF", Region::Southern, vec![RegionalBloc::Sacu]);
        assert!(ken.shared_blocs(&zaf).is_empty());
        assert!(!ken.same_region(&zaf));
    }

    #[test]
    fn risk_level_parse_is_lenient() {
        assert_eq!("Low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("medium".parse::<RiskLevel>().unwrap(), RiskLevel::Moderate);
        assert_eq!("Very High".parse::<RiskLevel>().unwrap(), RiskLevel::VeryHigh);
        assert_eq!("very-high".parse::<RiskLevel>().unwrap(), RiskLevel::VeryHigh);
        assert_eq!("extreme".parse::<RiskLevel>().unwrap(), RiskLevel::Unknown);
    }

    #[test]
    fn country_deserializes_with_defaults() {
        let yaml = r#"
code: rwa
name: Rwanda
region: east
population: 13800000
gdp_billion_usd: 13.9
gdp_per_capita_usd: 1000
regional_blocs: [EAC, COMESA]
"#;
        let country: Country = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(country.code.as_str(), "RWA");
        assert_eq!(country.risk, RiskLevel::Unknown);
        assert!(!country.is_ldc);
        assert_eq!(country.regional_blocs, vec![RegionalBloc::Eac, RegionalBloc::Comesa]);
    }

    #[test]
    fn unknown_risk_label_does_not_fail_record() {
        let json = r#"{"code":"TCD","name":"Chad","region":"central","population":1,
            "gdp_billion_usd":1.0,"gdp_per_capita_usd":1.0,"risk":"B-"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.risk, RiskLevel::Unknown);
    }
}
