//! # AfCFTA Phase-Out Engine
//!
//! Turns an MFN base rate into the preferential rate applicable in a given
//! year. The category/LDC combination is resolved once into a
//! [`PhaseOutSchedule`]:
//!
//! - [`PhaseOutSchedule::Immediate`]: category A, always 0%.
//! - [`PhaseOutSchedule::LinearWindow`]: categories B (5y), C (10y), and D
//!   for LDC destinations (13y). The rate falls in equal annual steps and
//!   reaches 0% when the window has elapsed.
//! - [`PhaseOutSchedule::Unmodified`]: category D for a non-LDC
//!   destination, or an unrecognized category. The MFN rate applies
//!   unchanged and the [`PolicyAnomaly`] travels with the result so the
//!   quote can be audited.
//!
//! Whether a non-LDC category D line should instead follow category C is
//! unsettled policy; the fallback keeps the MFN rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use afcfta_core::{EngineError, EngineResult, ReferenceYear};

use crate::category::DismantlingCategory;
use crate::money::round_rate;

/// Phase-out window for category B, in years.
pub const CATEGORY_B_WINDOW: u32 = 5;
/// Phase-out window for category C, in years.
pub const CATEGORY_C_WINDOW: u32 = 10;
/// Phase-out window for category D at LDC destinations, in years.
pub const CATEGORY_D_LDC_WINDOW: u32 = 13;
/// Longest span a projection may cover, in years.
pub const MAX_PROJECTION_YEARS: i64 = 100;

/// A policy case the engine handled by falling back to the MFN rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyAnomaly {
    /// Category D was requested for a destination not classified as LDC.
    CategoryDWithoutLdc,
    /// The requested category is not one of A–D.
    UnrecognizedCategory {
        /// The category text as supplied.
        value: String,
    },
}

impl PolicyAnomaly {
    /// Human-readable audit note.
    pub fn description(&self) -> String {
        match self {
            Self::CategoryDWithoutLdc => {
                "category D applies only to LDC destinations; MFN rate kept".to_string()
            }
            Self::UnrecognizedCategory { value } => {
                format!("unrecognized dismantling category {value:?}; MFN rate kept")
            }
        }
    }
}

impl std::fmt::Display for PolicyAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// How a base rate evolves over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseOutSchedule {
    /// Duty-free from the start.
    Immediate,
    /// Linear reduction to zero over `years`.
    LinearWindow {
        /// Length of the window in years.
        years: u32,
    },
    /// The base rate applies unchanged.
    Unmodified {
        /// Why no schedule applies.
        anomaly: PolicyAnomaly,
    },
}

impl PhaseOutSchedule {
    /// Resolve the schedule for a category at a destination.
    pub fn for_category(category: DismantlingCategory, is_ldc: bool) -> Self {
        match (category, is_ldc) {
            (DismantlingCategory::A, _) => Self::Immediate,
            (DismantlingCategory::B, _) => Self::LinearWindow {
                years: CATEGORY_B_WINDOW,
            },
            (DismantlingCategory::C, _) => Self::LinearWindow {
                years: CATEGORY_C_WINDOW,
            },
            (DismantlingCategory::D, true) => Self::LinearWindow {
                years: CATEGORY_D_LDC_WINDOW,
            },
            (DismantlingCategory::D, false) => Self::Unmodified {
                anomaly: PolicyAnomaly::CategoryDWithoutLdc,
            },
        }
    }

    /// Resolve the schedule from caller-supplied category text.
    ///
    /// Text outside A–D does not fail: it yields
    /// [`PhaseOutSchedule::Unmodified`] with
    /// [`PolicyAnomaly::UnrecognizedCategory`].
    pub fn from_category_text(raw: &str, is_ldc: bool) -> Self {
        match raw.parse::<DismantlingCategory>() {
            Ok(category) => Self::for_category(category, is_ldc),
            Err(_) => Self::Unmodified {
                anomaly: PolicyAnomaly::UnrecognizedCategory {
                    value: raw.to_string(),
                },
            },
        }
    }

    /// The anomaly behind an unmodified schedule, if any.
    pub fn anomaly(&self) -> Option<&PolicyAnomaly> {
        match self {
            Self::Unmodified { anomaly } => Some(anomaly),
            _ => None,
        }
    }

    /// Preferential rate after `years_elapsed` years, rounded to 2 decimals.
    ///
    /// A non-positive base rate always yields 0.
    pub fn rate_at(&self, base_rate: Decimal, years_elapsed: u32) -> Decimal {
        if base_rate <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        match self {
            Self::Immediate => Decimal::ZERO,
            Self::LinearWindow { years } => {
                let window = *years;
                if window == 0 || years_elapsed >= window {
                    return Decimal::ZERO;
                }
                // base − (base / window) × elapsed, evaluated as
                // base × (window − elapsed) / window to stay exact. Only a
                // base near the decimal limit divides first.
                let remaining = Decimal::from(window - years_elapsed);
                let window = Decimal::from(window);
                let rate = match base_rate.checked_mul(remaining) {
                    Some(scaled) => scaled / window,
                    None => base_rate / window * remaining,
                };
                round_rate(rate.max(Decimal::ZERO))
            }
            Self::Unmodified { .. } => base_rate,
        }
    }

    /// Year-by-year projection from `from` through `to`, inclusive.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidYearRange`] when `from` is after `to`, or the
    /// range spans more than [`MAX_PROJECTION_YEARS`] years.
    pub fn project(
        &self,
        base_rate: Decimal,
        from: ReferenceYear,
        to: ReferenceYear,
    ) -> EngineResult<Vec<PhaseOutPoint>> {
        if from > to {
            return Err(EngineError::InvalidYearRange {
                from: from.year(),
                to: to.year(),
                reason: "from is after to".to_string(),
            });
        }
        if i64::from(to.year()) - i64::from(from.year()) > MAX_PROJECTION_YEARS {
            return Err(EngineError::InvalidYearRange {
                from: from.year(),
                to: to.year(),
                reason: format!("span exceeds {MAX_PROJECTION_YEARS} years"),
            });
        }
        Ok((from.year()..=to.year())
            .map(ReferenceYear::new)
            .map(|year| {
                let years_elapsed = year.years_since_epoch();
                PhaseOutPoint {
                    year: year.year(),
                    years_elapsed,
                    rate: self.rate_at(base_rate, years_elapsed),
                }
            })
            .collect())
    }
}

/// One row of a phase-out projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseOutPoint {
    /// Calendar year.
    pub year: i32,
    /// Years elapsed since the AfCFTA epoch.
    pub years_elapsed: u32,
    /// Preferential rate, percent.
    pub rate: Decimal,
}

/// Preferential rate together with the schedule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseOutOutcome {
    /// Preferential rate, percent.
    pub rate: Decimal,
    /// Resolved schedule.
    pub schedule: PhaseOutSchedule,
}

impl PhaseOutOutcome {
    /// Whether the fallback path was taken.
    pub fn is_anomalous(&self) -> bool {
        self.schedule.anomaly().is_some()
    }
}

/// Preferential rate for `category` at a destination with the given LDC
/// status, `years_elapsed` years after the AfCFTA epoch.
pub fn phase_out_rate(
    base_rate: Decimal,
    category: DismantlingCategory,
    is_ldc: bool,
    years_elapsed: u32,
) -> PhaseOutOutcome {
    let schedule = PhaseOutSchedule::for_category(category, is_ldc);
    if let Some(anomaly) = schedule.anomaly() {
        tracing::warn!(%category, is_ldc, %base_rate, "{anomaly}");
    }
    PhaseOutOutcome {
        rate: schedule.rate_at(base_rate, years_elapsed),
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn category_c_after_four_years() {
        let outcome = phase_out_rate(dec!(15), DismantlingCategory::C, false, 4);
        assert_eq!(outcome.rate, dec!(9.0));
        assert!(!outcome.is_anomalous());
    }

    #[test]
    fn category_a_is_always_zero() {
        for years in [0, 1, 20] {
            assert_eq!(
                phase_out_rate(dec!(30), DismantlingCategory::A, false, years).rate,
                Decimal::ZERO
            );
        }
    }

    #[test]
    fn category_b_reaches_zero_at_window() {
        assert_eq!(phase_out_rate(dec!(20), DismantlingCategory::B, false, 4).rate, dec!(4));
        assert_eq!(phase_out_rate(dec!(20), DismantlingCategory::B, false, 5).rate, Decimal::ZERO);
        assert_eq!(phase_out_rate(dec!(20), DismantlingCategory::B, false, 9).rate, Decimal::ZERO);
    }

    #[test]
    fn category_d_for_ldc_uses_thirteen_years() {
        let outcome = phase_out_rate(dec!(13), DismantlingCategory::D, true, 3);
        assert_eq!(outcome.schedule, PhaseOutSchedule::LinearWindow { years: 13 });
        assert_eq!(outcome.rate, dec!(10));
        // 20 × 9 / 13 = 13.846… → 13.85
        assert_eq!(phase_out_rate(dec!(20), DismantlingCategory::D, true, 4).rate, dec!(13.85));
        assert_eq!(phase_out_rate(dec!(20), DismantlingCategory::D, true, 13).rate, Decimal::ZERO);
    }

    #[test]
    fn category_d_without_ldc_keeps_base_rate() {
        let outcome = phase_out_rate(dec!(17.5), DismantlingCategory::D, false, 6);
        assert_eq!(outcome.rate, dec!(17.5));
        assert!(outcome.is_anomalous());
        assert_eq!(outcome.schedule.anomaly(), Some(&PolicyAnomaly::CategoryDWithoutLdc));
    }

    #[test]
    fn unrecognized_text_keeps_base_rate() {
        let schedule = PhaseOutSchedule::from_category_text("X", true);
        assert_eq!(schedule.rate_at(dec!(12), 8), dec!(12));
        assert_eq!(
            schedule.anomaly(),
            Some(&PolicyAnomaly::UnrecognizedCategory {
                value: "X".to_string()
            })
        );
    }

    #[test]
    fn base_near_decimal_limit_does_not_overflow() {
        let schedule = PhaseOutSchedule::LinearWindow { years: 13 };
        let rate = schedule.rate_at(Decimal::MAX, 4);
        assert!(rate > Decimal::ZERO && rate < Decimal::MAX);
    }

    #[test]
    fn non_positive_base_is_zero_everywhere() {
        for schedule in [
            PhaseOutSchedule::Immediate,
            PhaseOutSchedule::LinearWindow { years: 5 },
            PhaseOutSchedule::Unmodified {
                anomaly: PolicyAnomaly::CategoryDWithoutLdc,
            },
        ] {
            assert_eq!(schedule.rate_at(Decimal::ZERO, 0), Decimal::ZERO);
            assert_eq!(schedule.rate_at(dec!(-5), 2), Decimal::ZERO);
        }
    }

    #[test]
    fn projection_covers_inclusive_range() {
        let schedule = PhaseOutSchedule::for_category(DismantlingCategory::B, false);
        let points = schedule
            .project(dec!(10), ReferenceYear::new(2020), ReferenceYear::new(2027))
            .unwrap();
        let rates: Vec<Decimal> = points.iter().map(|p| p.rate).collect();
        assert_eq!(
            rates,
            vec![dec!(10), dec!(10), dec!(8), dec!(6), dec!(4), dec!(2), dec!(0), dec!(0)]
        );
        assert_eq!(points[0].years_elapsed, 0);
        assert_eq!(points.last().unwrap().year, 2027);
    }

    #[test]
    fn projection_rejects_inverted_range() {
        let err = PhaseOutSchedule::Immediate
            .project(dec!(10), ReferenceYear::new(2030), ReferenceYear::new(2029))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidYearRange { from: 2030, to: 2029, .. }
        ));
    }

    #[test]
    fn projection_span_is_capped() {
        let schedule = PhaseOutSchedule::for_category(DismantlingCategory::C, false);
        let points = schedule
            .project(dec!(10), ReferenceYear::new(2000), ReferenceYear::new(2100))
            .unwrap();
        assert_eq!(points.len(), 101);

        let err = schedule
            .project(dec!(10), ReferenceYear::new(2000), ReferenceYear::new(2101))
            .unwrap_err();
        assert!(err.to_string().contains("span exceeds 100 years"));
        assert!(schedule
            .project(dec!(10), ReferenceYear::new(i32::MIN), ReferenceYear::new(i32::MAX))
            .is_err());
    }

    #[test]
    fn schedule_serializes_tagged() {
        let json = serde_json::to_value(PhaseOutSchedule::LinearWindow { years: 10 }).unwrap();
        assert_eq!(json["type"], "linear_window");
        assert_eq!(json["years"], 10);
        let json = serde_json::to_value(PhaseOutSchedule::Unmodified {
            anomaly: PolicyAnomaly::CategoryDWithoutLdc,
        })
        .unwrap();
        assert_eq!(json["anomaly"]["kind"], "category_d_without_ldc");
    }
}
