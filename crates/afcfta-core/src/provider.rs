//! # Provider Traits
//!
//! The seams through which the engine reads data it does not own. Every
//! lookup returns `Option`: absence is a data-completeness gap, and the
//! consuming component applies its documented default. Implementations must
//! be immutable after construction (`Send + Sync`, `&self` only) so that any
//! number of calculations can share one instance without synchronization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::country::{Country, RegionalBloc};
use crate::identity::{CountryCode, SectorCode};
use crate::sector::SectorInfo;

/// A statutory rate (percent) together with the legal instrument that
/// imposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevyRate {
    /// Rate in percent (`18` means 18%).
    pub rate: Decimal,
    /// Citation shown in the cascade journal.
    pub legal_ref: String,
}

impl LevyRate {
    /// Pair a rate with its legal reference.
    pub fn new(rate: Decimal, legal_ref: impl Into<String>) -> Self {
        Self {
            rate,
            legal_ref: legal_ref.into(),
        }
    }
}

/// Country profiles and the HS sector table.
pub trait ReferenceDataProvider: Send + Sync {
    /// Profile for `code`, if the store has one.
    fn country(&self, code: &CountryCode) -> Option<&Country>;

    /// All profiles, in a stable order.
    fn countries(&self) -> Vec<&Country>;

    /// Row of the HS chapter table.
    fn sector_info(&self, sector: &SectorCode) -> Option<&SectorInfo>;

    /// All chapter rows, ordered by chapter.
    fn sectors(&self) -> Vec<&SectorInfo>;

    /// Regional blocs `code` belongs to. Unknown countries belong to none.
    fn regional_blocs(&self, code: &CountryCode) -> &[RegionalBloc] {
        self.country(code)
            .map(|c| c.regional_blocs.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `code` is classified as a Least Developed Country.
    /// Unknown countries are treated as not LDC.
    fn is_ldc(&self, code: &CountryCode) -> bool {
        self.country(code).is_some_and(|c| c.is_ldc)
    }
}

/// MFN base rates and per-country adjustment factors.
pub trait TariffScheduleProvider: Send + Sync {
    /// MFN base rate (percent) for a sector.
    fn mfn_base_rate(&self, sector: &SectorCode) -> Option<Decimal>;

    /// Multiplicative adjustment applied to base rates for a destination.
    fn mfn_adjustment(&self, destination: &CountryCode) -> Option<Decimal>;
}

/// Per-country statutory levies applied in the import cascade.
pub trait LevyRateProvider: Send + Sync {
    /// Value-added tax on imports.
    fn vat_rate(&self, country: &CountryCode) -> Option<LevyRate>;

    /// Customs statistical or processing fee.
    fn statistical_fee_rate(&self, country: &CountryCode) -> Option<LevyRate>;

    /// Community solidarity levy (e.g. ECOWAS, WAEMU).
    fn community_levy_rate(&self, country: &CountryCode) -> Option<LevyRate>;

    /// Regional-union or African Union import levy.
    fn regional_levy_rate(&self, country: &CountryCode) -> Option<LevyRate>;

    /// Excise duty for a sector. No store populates this yet.
    fn excise_rate(&self, _country: &CountryCode, _sector: &SectorCode) -> Option<LevyRate> {
        None
    }
}
