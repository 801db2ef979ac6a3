//! # Tariff Quote
//!
//! [`TariffCalculator`] runs the whole pipeline for one consignment and
//! returns a [`TariffQuote`]: both duty rates, both levy cascades, the
//! savings, and any policy anomaly met on the way.
//!
//! The calculator owns no mutable state. It holds the reference data behind
//! `Arc`, so clones are cheap and any number of quotes can run concurrently.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use afcfta_core::{
    CommodityCode, CountryCode, EngineError, EngineResult, HsSection, LevyRateProvider,
    ReferenceDataProvider, ReferenceYear, SectorCode, TariffScheduleProvider,
};

use crate::cascade::{compute_cascade_with_limit, LevyCascadeResult, LevySchedule, DEFAULT_VAT_RATE};
use crate::category::{classify_sector, DismantlingCategory};
use crate::classifier::classify;
use crate::mfn::resolve_rate;
use crate::money::{checked_trade_value, percent_of, MAX_TRADE_VALUE};
use crate::phase_out::{PhaseOutSchedule, PolicyAnomaly};
use crate::savings::estimate_savings;

/// Inputs to one quote, as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Six-digit HS code; dots and spaces are ignored.
    pub hs_code: String,
    pub origin: String,
    pub destination: String,
    /// Merchandise (customs) value.
    pub value: Decimal,
    /// Category override. When absent the sector's default category applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Year the preferential rate is evaluated for.
    pub reference_year: ReferenceYear,
}

/// MFN vs AfCFTA comparison for one consignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffQuote {
    pub hs_code: CommodityCode,
    pub sector: SectorCode,
    pub sector_name: String,
    pub section: HsSection,
    pub origin: CountryCode,
    pub destination: CountryCode,
    pub value: Decimal,
    /// `None` when an unrecognized category override was supplied.
    pub category: Option<DismantlingCategory>,
    pub schedule: PhaseOutSchedule,
    pub destination_is_ldc: bool,
    pub reference_year: ReferenceYear,
    pub years_since_epoch: u32,
    pub mfn_rate: Decimal,
    pub mfn_amount: Decimal,
    pub afcfta_rate: Decimal,
    pub afcfta_amount: Decimal,
    pub savings_amount: Decimal,
    pub savings_pct: Decimal,
    pub is_beneficial: bool,
    pub mfn_cascade: LevyCascadeResult,
    pub afcfta_cascade: LevyCascadeResult,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anomalies: Vec<PolicyAnomaly>,
}

/// Assembles quotes over shared, immutable reference data.
#[derive(Clone)]
pub struct TariffCalculator {
    reference: Arc<dyn ReferenceDataProvider>,
    schedule: Arc<dyn TariffScheduleProvider>,
    levies: Arc<dyn LevyRateProvider>,
    max_trade_value: Decimal,
    vat_default: Decimal,
}

impl std::fmt::Debug for TariffCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TariffCalculator")
            .field("max_trade_value", &self.max_trade_value)
            .field("vat_default", &self.vat_default)
            .finish_non_exhaustive()
    }
}

impl TariffCalculator {
    /// Build a calculator over one store that provides every table.
    pub fn new<P>(data: Arc<P>) -> Self
    where
        P: ReferenceDataProvider + TariffScheduleProvider + LevyRateProvider + 'static,
    {
        Self {
            reference: data.clone(),
            schedule: data.clone(),
            levies: data,
            max_trade_value: MAX_TRADE_VALUE,
            vat_default: DEFAULT_VAT_RATE,
        }
    }

    /// Override the merchandise value ceiling.
    pub fn with_max_trade_value(mut self, max: Decimal) -> Self {
        self.max_trade_value = max;
        self
    }

    /// Override the VAT rate used for destinations without a VAT entry.
    pub fn with_vat_default(mut self, rate: Decimal) -> Self {
        self.vat_default = rate;
        self
    }

    /// Levy schedule the calculator would apply at `destination`.
    pub fn levy_schedule(
        &self,
        destination: &CountryCode,
        sector: Option<&SectorCode>,
    ) -> LevySchedule {
        LevySchedule::resolve(self.levies.as_ref(), destination, sector, self.vat_default)
    }

    /// Levy cascade for a consignment into `destination`, bounded by the
    /// configured value ceiling.
    pub fn cascade(
        &self,
        value: Decimal,
        customs_duty: Decimal,
        destination: &CountryCode,
        sector: Option<&SectorCode>,
    ) -> EngineResult<LevyCascadeResult> {
        let levies = self.levy_schedule(destination, sector);
        compute_cascade_with_limit(value, customs_duty, &levies, self.max_trade_value)
    }

    /// Compare MFN and AfCFTA treatment of one consignment.
    ///
    /// # Errors
    ///
    /// Malformed codes, an unknown sector, identical origin and destination,
    /// a value that rounds to cents outside `(0, max_trade_value]`, or a
    /// rate too large to apply. An unrecognized category
    /// override is not an error: it is recorded in
    /// [`TariffQuote::anomalies`] and the MFN rate is kept.
    pub fn quote(&self, request: &QuoteRequest) -> EngineResult<TariffQuote> {
        let hs_code = CommodityCode::parse_field(request.hs_code.as_str(), "hs_code")?;
        let origin = CountryCode::parse_field(request.origin.as_str(), "origin")?;
        let destination = CountryCode::parse_field(request.destination.as_str(), "destination")?;
        if origin == destination {
            return Err(EngineError::InvalidCountryCode {
                field: "destination",
                value: destination.to_string(),
                reason: "destination must differ from origin".to_string(),
            });
        }
        let value = checked_trade_value(request.value, self.max_trade_value)?;

        let sector = classify(&hs_code, self.reference.as_ref())?;
        let is_ldc = self.reference.is_ldc(&destination);
        if self.reference.country(&destination).is_none() {
            tracing::debug!(%destination, "no country profile; treating as non-LDC");
        }

        let (category, schedule) = match request.category.as_deref() {
            Some(raw) => {
                let schedule = PhaseOutSchedule::from_category_text(raw, is_ldc);
                (raw.parse::<DismantlingCategory>().ok(), schedule)
            }
            None => {
                let category = classify_sector(&sector.code);
                (Some(category), PhaseOutSchedule::for_category(category, is_ldc))
            }
        };
        let anomalies: Vec<PolicyAnomaly> = schedule.anomaly().cloned().into_iter().collect();
        for anomaly in &anomalies {
            tracing::warn!(%hs_code, %destination, is_ldc, "{anomaly}");
        }

        let years_since_epoch = request.reference_year.years_since_epoch();
        let mfn_rate = resolve_rate(&sector.code, &destination, self.schedule.as_ref());
        let afcfta_rate = schedule.rate_at(mfn_rate, years_since_epoch);
        let mfn_amount = duty_amount(value, mfn_rate, "mfn_rate")?;
        let afcfta_amount = duty_amount(value, afcfta_rate, "afcfta_rate")?;

        let levies = self.levy_schedule(&destination, Some(&sector.code));
        let mfn_cascade =
            compute_cascade_with_limit(value, mfn_amount, &levies, self.max_trade_value)?;
        let afcfta_cascade =
            compute_cascade_with_limit(value, afcfta_amount, &levies, self.max_trade_value)?;
        let savings = estimate_savings(mfn_cascade.total, afcfta_cascade.total);

        tracing::debug!(
            %hs_code, %origin, %destination, %mfn_rate, %afcfta_rate,
            savings = %savings.amount, "quote computed"
        );

        Ok(TariffQuote {
            hs_code,
            sector: sector.code.clone(),
            sector_name: sector.name.clone(),
            section: sector.section,
            origin,
            destination,
            value,
            category,
            schedule,
            destination_is_ldc: is_ldc,
            reference_year: request.reference_year,
            years_since_epoch,
            mfn_rate,
            mfn_amount,
            afcfta_rate,
            afcfta_amount,
            savings_amount: savings.amount,
            savings_pct: savings.pct,
            is_beneficial: savings.is_beneficial,
            mfn_cascade,
            afcfta_cascade,
            anomalies,
        })
    }
}

fn duty_amount(value: Decimal, rate: Decimal, field: &'static str) -> EngineResult<Decimal> {
    percent_of(value, rate).ok_or_else(|| EngineError::InvalidRate {
        field,
        value: rate.to_string(),
        reason: "duty overflows decimal range".to_string(),
    })
}
