//! # Levy Cascade
//!
//! Applies the statutory import charges of one destination on top of a
//! customs duty, in fixed order, and records every charge as a journal row:
//!
//! | # | Step | Base | Kept when |
//! |---|------|------|-----------|
//! | 0 | Merchandise value | value | always |
//! | 1 | Customs duty | value | always |
//! | 2 | Excise | value + duty | rate > 0 |
//! | 3 | Statistical fee | value | rate > 0 |
//! | 4 | Community solidarity levy | value | rate > 0 |
//! | 5 | Regional levy | value | rate > 0 |
//! | 6 | VAT | running total | always |
//!
//! Indices are re-numbered after omitted steps so they stay contiguous.
//! The journal is the result of a fold over [`LevyKind::CASCADE_ORDER`];
//! a cascade holds no state between calls, so the MFN and AfCFTA runs of
//! one quote are fully independent.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use afcfta_core::{
    CountryCode, EngineError, EngineResult, LevyRate, LevyRateProvider, SectorCode,
};

use crate::money::{
    checked_trade_value, percent_of, round_money, round_rate, HUNDRED, MAX_TRADE_VALUE,
};

/// VAT rate (percent) for destinations with no VAT entry.
pub const DEFAULT_VAT_RATE: Decimal = dec!(18);

const DEFAULT_REF: &str = "engine default";
const NOT_LEVIED: &str = "not levied";

/// Kind of a cascade journal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevyKind {
    Seed,
    CustomsDuty,
    Excise,
    StatisticalFee,
    CommunityLevy,
    RegionalLevy,
    Vat,
}

impl LevyKind {
    /// Journal order.
    pub const CASCADE_ORDER: [LevyKind; 7] = [
        LevyKind::Seed,
        LevyKind::CustomsDuty,
        LevyKind::Excise,
        LevyKind::StatisticalFee,
        LevyKind::CommunityLevy,
        LevyKind::RegionalLevy,
        LevyKind::Vat,
    ];

    /// Journal label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Seed => "Merchandise value",
            Self::CustomsDuty => "Customs duty",
            Self::Excise => "Excise duty",
            Self::StatisticalFee => "Statistical fee",
            Self::CommunityLevy => "Community solidarity levy",
            Self::RegionalLevy => "Regional levy",
            Self::Vat => "VAT",
        }
    }

    /// Schedule field the rate is configured under.
    fn field(&self) -> &'static str {
        match self {
            Self::Seed => "value",
            Self::CustomsDuty => "customs_duty",
            Self::Excise => "excise",
            Self::StatisticalFee => "statistical_fee",
            Self::CommunityLevy => "community_levy",
            Self::RegionalLevy => "regional_levy",
            Self::Vat => "vat",
        }
    }

    /// Whether the row is written even when its amount is zero.
    fn always_recorded(&self) -> bool {
        matches!(self, Self::Seed | Self::CustomsDuty | Self::Vat)
    }
}

impl std::fmt::Display for LevyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rates applied by one cascade run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevySchedule {
    /// Destination the schedule was resolved for, if any.
    pub country: Option<CountryCode>,
    pub excise: LevyRate,
    pub statistical_fee: LevyRate,
    pub community_levy: LevyRate,
    pub regional_levy: LevyRate,
    pub vat: LevyRate,
}

impl Default for LevySchedule {
    /// No levies except VAT at [`DEFAULT_VAT_RATE`].
    fn default() -> Self {
        Self::with_vat_default(DEFAULT_VAT_RATE)
    }
}

impl LevySchedule {
    /// Empty schedule with the given VAT fallback.
    pub fn with_vat_default(vat_rate: Decimal) -> Self {
        let none = LevyRate::new(Decimal::ZERO, NOT_LEVIED);
        Self {
            country: None,
            excise: none.clone(),
            statistical_fee: none.clone(),
            community_levy: none.clone(),
            regional_levy: none,
            vat: LevyRate::new(vat_rate, DEFAULT_REF),
        }
    }

    /// Resolve the schedule for `country` from `levies`, filling gaps with
    /// defaults: zero for every levy, `vat_default` for VAT. Excise is
    /// looked up only when a sector is known.
    pub fn resolve(
        levies: &dyn LevyRateProvider,
        country: &CountryCode,
        sector: Option<&SectorCode>,
        vat_default: Decimal,
    ) -> Self {
        let fallback = Self::with_vat_default(vat_default);
        let vat = levies.vat_rate(country).unwrap_or_else(|| {
            tracing::debug!(%country, default = %vat_default, "no VAT entry; using default");
            fallback.vat.clone()
        });
        Self {
            country: Some(country.clone()),
            excise: sector
                .and_then(|s| levies.excise_rate(country, s))
                .unwrap_or_else(|| fallback.excise.clone()),
            statistical_fee: levies
                .statistical_fee_rate(country)
                .unwrap_or_else(|| fallback.statistical_fee.clone()),
            community_levy: levies
                .community_levy_rate(country)
                .unwrap_or_else(|| fallback.community_levy.clone()),
            regional_levy: levies
                .regional_levy_rate(country)
                .unwrap_or_else(|| fallback.regional_levy.clone()),
            vat,
        }
    }

    fn rate_for(&self, kind: LevyKind) -> Option<&LevyRate> {
        match kind {
            LevyKind::Seed | LevyKind::CustomsDuty => None,
            LevyKind::Excise => Some(&self.excise),
            LevyKind::StatisticalFee => Some(&self.statistical_fee),
            LevyKind::CommunityLevy => Some(&self.community_levy),
            LevyKind::RegionalLevy => Some(&self.regional_levy),
            LevyKind::Vat => Some(&self.vat),
        }
    }

    fn validate(&self) -> EngineResult<()> {
        for kind in LevyKind::CASCADE_ORDER {
            let Some(levy) = self.rate_for(kind) else {
                continue;
            };
            if levy.rate < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    field: kind.field(),
                    value: levy.rate.to_string(),
                    reason: "levy rates must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// One journal row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevyStep {
    pub index: usize,
    pub kind: LevyKind,
    pub name: String,
    /// Amount the rate was applied to.
    pub base: Decimal,
    /// Rate in percent.
    pub rate: Decimal,
    pub amount: Decimal,
    /// Running total after this step.
    pub cumulative_total: Decimal,
    pub legal_ref: String,
}

/// The full journal of one cascade run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevyCascadeResult {
    pub merchandise_value: Decimal,
    pub steps: Vec<LevyStep>,
    /// Sum of every charge after the seed.
    pub total_levies: Decimal,
    /// Landed cost: value plus every charge.
    pub total: Decimal,
}

impl LevyCascadeResult {
    /// Row of the given kind, if it was recorded.
    pub fn step(&self, kind: LevyKind) -> Option<&LevyStep> {
        self.steps.iter().find(|s| s.kind == kind)
    }

    /// Amount charged for `kind`; zero when the row was omitted.
    pub fn amount_of(&self, kind: LevyKind) -> Decimal {
        self.step(kind).map_or(Decimal::ZERO, |s| s.amount)
    }
}

fn overflow(field: &'static str, value: Decimal) -> EngineError {
    EngineError::InvalidTradeValue {
        field,
        value,
        reason: "amount overflows decimal range".to_string(),
    }
}

/// Charge for one step: (base, rate, amount, legal reference).
fn charge(
    kind: LevyKind,
    value: Decimal,
    duty: Decimal,
    running: Decimal,
    schedule: &LevySchedule,
) -> EngineResult<(Decimal, Decimal, Decimal, String)> {
    match (kind, schedule.rate_for(kind)) {
        (LevyKind::Seed, _) => Ok((value, Decimal::ZERO, value, String::new())),
        (LevyKind::CustomsDuty, _) => {
            let rate = duty
                .checked_div(value)
                .and_then(|r| r.checked_mul(HUNDRED))
                .ok_or_else(|| overflow("customs_duty", duty))?;
            Ok((value, round_rate(rate), duty, "customs tariff".to_string()))
        }
        (_, Some(levy)) => {
            let base = match kind {
                LevyKind::Excise => value
                    .checked_add(duty)
                    .ok_or_else(|| overflow("customs_duty", duty))?,
                LevyKind::Vat => running,
                _ => value,
            };
            let amount =
                percent_of(base, levy.rate).ok_or_else(|| EngineError::InvalidRate {
                    field: kind.field(),
                    value: levy.rate.to_string(),
                    reason: format!("charge on {base} overflows decimal range"),
                })?;
            Ok((base, levy.rate, amount, levy.legal_ref.clone()))
        }
        (_, None) => Ok((value, Decimal::ZERO, Decimal::ZERO, String::new())),
    }
}

/// Run the cascade for a consignment of `value` that owes `customs_duty`,
/// accepting values up to [`MAX_TRADE_VALUE`].
///
/// # Errors
///
/// See [`compute_cascade_with_limit`].
pub fn compute_cascade(
    value: Decimal,
    customs_duty: Decimal,
    schedule: &LevySchedule,
) -> EngineResult<LevyCascadeResult> {
    compute_cascade_with_limit(value, customs_duty, schedule, MAX_TRADE_VALUE)
}

/// Run the cascade with an explicit merchandise value ceiling.
///
/// The value is rounded to cents before it is checked.
///
/// # Errors
///
/// - [`EngineError::InvalidTradeValue`] if the rounded value is not in
///   `(0, max_value]`, the duty is negative, or a running total overflows.
/// - [`EngineError::InvalidRate`] if the schedule carries a negative rate
///   or a charge overflows.
pub fn compute_cascade_with_limit(
    value: Decimal,
    customs_duty: Decimal,
    schedule: &LevySchedule,
    max_value: Decimal,
) -> EngineResult<LevyCascadeResult> {
    let value = checked_trade_value(value, max_value)?;
    if customs_duty < Decimal::ZERO {
        return Err(EngineError::InvalidTradeValue {
            field: "customs_duty",
            value: customs_duty,
            reason: "customs duty must not be negative".to_string(),
        });
    }
    schedule.validate()?;
    let duty = round_money(customs_duty);

    let steps = LevyKind::CASCADE_ORDER.iter().try_fold(
        Vec::with_capacity(LevyKind::CASCADE_ORDER.len()),
        |mut journal: Vec<LevyStep>, &kind| -> EngineResult<Vec<LevyStep>> {
            let running = journal.last().map_or(Decimal::ZERO, |s| s.cumulative_total);
            let (base, rate, amount, legal_ref) = charge(kind, value, duty, running, schedule)?;
            if kind.always_recorded() || rate > Decimal::ZERO {
                let cumulative_total = running
                    .checked_add(amount)
                    .ok_or_else(|| overflow("value", value))?;
                journal.push(LevyStep {
                    index: journal.len(),
                    kind,
                    name: kind.label().to_string(),
                    base,
                    rate,
                    amount,
                    cumulative_total,
                    legal_ref,
                });
            }
            Ok(journal)
        },
    )?;

    let total = steps.last().map_or(value, |s| s.cumulative_total);
    Ok(LevyCascadeResult {
        merchandise_value: value,
        total_levies: total - value,
        total,
        steps,
    })
}
