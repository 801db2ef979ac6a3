//! MFN rate resolver: sector + destination → applied MFN rate.
//!
//! `base_rate(sector) × adjustment(destination)`, rounded to 2 decimals.
//! Missing table rows never fail: the base rate defaults to
//! [`DEFAULT_MFN_RATE`] and the adjustment to [`DEFAULT_ADJUSTMENT`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use afcfta_core::{CountryCode, SectorCode, TariffScheduleProvider};

use crate::money::round_rate;

/// Base rate (percent) for sectors absent from the MFN table.
pub const DEFAULT_MFN_RATE: Decimal = dec!(10);

/// Adjustment factor for destinations absent from the adjustment table.
pub const DEFAULT_ADJUSTMENT: Decimal = dec!(1);

/// Applied MFN rate (percent) for `sector` imported into `destination`.
pub fn resolve_rate(
    sector: &SectorCode,
    destination: &CountryCode,
    schedule: &dyn TariffScheduleProvider,
) -> Decimal {
    let base = schedule.mfn_base_rate(sector).unwrap_or_else(|| {
        tracing::debug!(%sector, default = %DEFAULT_MFN_RATE, "no MFN base rate; using default");
        DEFAULT_MFN_RATE
    });
    let factor = schedule
        .mfn_adjustment(destination)
        .unwrap_or(DEFAULT_ADJUSTMENT);
    // Saturates; the duty computation rejects rates too large to apply.
    round_rate(base.saturating_mul(factor))
}
