//! # afcfta-tariff — MFN vs AfCFTA Tariff Engine
//!
//! Computes what a consignment pays at the border under the default MFN
//! regime and under the AfCFTA preferential schedule, and what the
//! difference is worth once every statutory levy and VAT has been applied.
//!
//! ## Pipeline
//!
//! ```text
//! CommodityCode ─► classifier ─► SectorInfo
//!                                   │
//!            ┌──────────────────────┴──────────────┐
//!            ▼                                     ▼
//!   category::classify_sector            mfn::resolve_rate
//!            │                                     │
//!            └──────────► phase_out ◄──────────────┘
//!                             │
//!             MFN duty ───────┼──────── AfCFTA duty
//!                 ▼                          ▼
//!          cascade (run 1)            cascade (run 2)
//!                 └──────────► savings ◄─────┘
//! ```
//!
//! [`TariffCalculator`] wires the whole pipeline for a [`QuoteRequest`].
//! Each stage is also exposed as a free function over plain values so it
//! can be tested and reused on its own.
//!
//! ## Determinism
//!
//! Every function is pure over its inputs and the injected, immutable
//! providers. Rates and amounts are exact decimals; nothing reads the
//! wall clock (the reference year is a request parameter).

pub mod cascade;
pub mod category;
pub mod classifier;
pub mod mfn;
pub mod money;
pub mod phase_out;
pub mod quote;
pub mod savings;

pub use cascade::{
    compute_cascade, compute_cascade_with_limit, LevyCascadeResult, LevyKind, LevySchedule,
    LevyStep,
};
pub use category::{classify_sector, DismantlingCategory};
pub use classifier::{classify, classify_code};
pub use mfn::resolve_rate;
pub use money::MAX_TRADE_VALUE;
pub use phase_out::{phase_out_rate, PhaseOutOutcome, PhaseOutPoint, PhaseOutSchedule, PolicyAnomaly};
pub use quote::{QuoteRequest, TariffCalculator, TariffQuote};
pub use savings::{estimate_savings, SavingsEstimate};
