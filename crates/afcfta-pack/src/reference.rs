//! # Frozen Reference Data
//!
//! [`ReferenceData`] is the process-wide, read-only store behind every
//! provider trait. It is assembled once (built-in tables, then an optional
//! YAML overlay) and never mutated afterwards; callers share it through
//! `Arc` and pass it into the calculators by constructor injection.
//!
//! ## Overlay Format
//!
//! ```yaml
//! countries:
//!   - code: KEN
//!     name: Kenya
//!     region: east
//!     population: 55100000
//!     gdp_billion_usd: 113.4
//!     gdp_per_capita_usd: 2099
//!     regional_blocs: [EAC, COMESA, IGAD]
//! mfn_base_rates:
//!   "87": 30
//! mfn_adjustments:
//!   KEN: 1.0
//! levies:
//!   KEN:
//!     vat: { rate: 16, legal_ref: "Value Added Tax Act, 2013, s.5" }
//! ```
//!
//! Map keys for sectors must be quoted so YAML keeps the leading zero.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use afcfta_core::{
    Country, CountryCode, LevyRate, LevyRateProvider, ReferenceDataProvider, SectorCode,
    SectorInfo, TariffScheduleProvider,
};

use crate::error::{PackError, PackResult};
use crate::levies::{builtin_levies, CountryLevies};
use crate::mfn::{mfn_adjustments, mfn_base_rates};
use crate::parser::load_yaml_typed;
use crate::sectors::hs_sector_table;

/// Largest rate (percent) an overlay may declare.
const MAX_RATE_PCT: Decimal = dec!(1000);
/// Largest MFN adjustment factor an overlay may declare.
const MAX_ADJUSTMENT: Decimal = dec!(10);

/// YAML overlay merged over the built-in tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceDataFile {
    /// Country profiles. A code may appear at most once.
    #[serde(default)]
    pub countries: Vec<Country>,
    /// MFN base-rate overrides, percent.
    #[serde(default)]
    pub mfn_base_rates: BTreeMap<SectorCode, Decimal>,
    /// Destination adjustment overrides.
    #[serde(default)]
    pub mfn_adjustments: BTreeMap<CountryCode, Decimal>,
    /// Levy schedule overrides, merged component-wise.
    #[serde(default)]
    pub levies: BTreeMap<CountryCode, CountryLevies>,
}

/// Immutable reference store.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    countries: BTreeMap<CountryCode, Country>,
    sectors: BTreeMap<SectorCode, SectorInfo>,
    mfn_base_rates: BTreeMap<SectorCode, Decimal>,
    mfn_adjustments: BTreeMap<CountryCode, Decimal>,
    levies: BTreeMap<CountryCode, CountryLevies>,
}

impl ReferenceData {
    /// The built-in policy tables, with no country profiles.
    pub fn builtin() -> Self {
        let sectors = hs_sector_table()
            .into_iter()
            .map(|info| (info.code.clone(), info))
            .collect();

        let mfn_base_rates = mfn_base_rates()
            .into_iter()
            .filter_map(|(chapter, rate)| Some((SectorCode::from_chapter(chapter).ok()?, rate)))
            .collect();

        let mfn_adjustments = mfn_adjustments()
            .into_iter()
            .filter_map(|(code, factor)| Some((CountryCode::new(code).ok()?, factor)))
            .collect();

        let levies = builtin_levies()
            .into_iter()
            .filter_map(|(code, levies)| Some((CountryCode::new(code).ok()?, levies)))
            .collect();

        Self {
            countries: BTreeMap::new(),
            sectors,
            mfn_base_rates,
            mfn_adjustments,
            levies,
        }
    }

    /// Built-in tables overlaid with the YAML file at `path`.
    pub fn load(path: &Path) -> PackResult<Self> {
        let file: ReferenceDataFile = load_yaml_typed(path)?;
        let data = Self::builtin().with_overlay(file)?;
        tracing::info!(
            path = %path.display(),
            countries = data.countries.len(),
            levy_schedules = data.levies.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    /// Validate `file` and merge it over `self`, consuming both.
    ///
    /// Country profiles replace any existing profile with the same code.
    /// Levy schedules merge component-wise.
    pub fn with_overlay(mut self, file: ReferenceDataFile) -> PackResult<Self> {
        validate_overlay(&file)?;

        for country in file.countries {
            self.countries.insert(country.code.clone(), country);
        }
        self.mfn_base_rates.extend(file.mfn_base_rates);
        self.mfn_adjustments.extend(file.mfn_adjustments);
        for (code, overlay) in file.levies {
            let merged = match self.levies.get(&code) {
                Some(existing) => existing.merged_with(&overlay),
                None => overlay,
            };
            self.levies.insert(code, merged);
        }
        Ok(self)
    }

    /// Levy schedule for a country, if any.
    pub fn levies(&self, country: &CountryCode) -> Option<&CountryLevies> {
        self.levies.get(country)
    }

    /// Number of country profiles loaded.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

fn validate_overlay(file: &ReferenceDataFile) -> PackResult<()> {
    let mut seen = BTreeSet::new();
    for country in &file.countries {
        let key = country.code.to_string();
        if !seen.insert(country.code.clone()) {
            return Err(PackError::DuplicateCountry { code: key });
        }
        if country.name.trim().is_empty() {
            return Err(invalid("countries", &key, "name must not be empty"));
        }
        if !country.gdp_billion_usd.is_finite() || country.gdp_billion_usd < 0.0 {
            return Err(invalid("countries", &key, "gdp_billion_usd must be finite and non-negative"));
        }
        if !country.gdp_per_capita_usd.is_finite() || country.gdp_per_capita_usd < 0.0 {
            return Err(invalid(
                "countries",
                &key,
                "gdp_per_capita_usd must be finite and non-negative",
            ));
        }
        if let Some(index) = country.infrastructure_index {
            if !(0.0..=100.0).contains(&index) {
                return Err(invalid("countries", &key, "infrastructure_index must be within 0..=100"));
            }
        }
    }

    for (sector, rate) in &file.mfn_base_rates {
        if rate.is_sign_negative() {
            return Err(invalid("mfn_base_rates", sector.as_str(), "rate must be non-negative"));
        }
        if *rate > MAX_RATE_PCT {
            return Err(invalid("mfn_base_rates", sector.as_str(), "rate must not exceed 1000%"));
        }
    }
    for (code, factor) in &file.mfn_adjustments {
        if *factor <= Decimal::ZERO || *factor > MAX_ADJUSTMENT {
            return Err(invalid(
                "mfn_adjustments",
                code.as_str(),
                "factor must be positive and at most 10",
            ));
        }
    }
    for (code, levies) in &file.levies {
        for (name, rate) in levies.components() {
            if rate.rate.is_sign_negative() || rate.rate > MAX_RATE_PCT {
                return Err(invalid(
                    "levies",
                    &format!("{code}.{name}"),
                    "rate must be within 0..=1000",
                ));
            }
        }
    }
    Ok(())
}

fn invalid(table: &'static str, key: &str, reason: &str) -> PackError {
    PackError::InvalidEntry {
        table,
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

impl ReferenceDataProvider for ReferenceData {
    fn country(&self, code: &CountryCode) -> Option<&Country> {
        self.countries.get(code)
    }

    fn countries(&self) -> Vec<&Country> {
        self.countries.values().collect()
    }

    fn sector_info(&self, sector: &SectorCode) -> Option<&SectorInfo> {
        self.sectors.get(sector)
    }

    fn sectors(&self) -> Vec<&SectorInfo> {
        self.sectors.values().collect()
    }
}

impl TariffScheduleProvider for ReferenceData {
    fn mfn_base_rate(&self, sector: &SectorCode) -> Option<Decimal> {
        self.mfn_base_rates.get(sector).copied()
    }

    fn mfn_adjustment(&self, destination: &CountryCode) -> Option<Decimal> {
        self.mfn_adjustments.get(destination).copied()
    }
}

impl LevyRateProvider for ReferenceData {
    fn vat_rate(&self, country: &CountryCode) -> Option<LevyRate> {
        self.levies.get(country)?.vat.clone()
    }

    fn statistical_fee_rate(&self, country: &CountryCode) -> Option<LevyRate> {
        self.levies.get(country)?.statistical_fee.clone()
    }

    fn community_levy_rate(&self, country: &CountryCode) -> Option<LevyRate> {
        self.levies.get(country)?.community_levy.clone()
    }

    fn regional_levy_rate(&self, country: &CountryCode) -> Option<LevyRate> {
        self.levies.get(country)?.regional_levy.clone()
    }
}
