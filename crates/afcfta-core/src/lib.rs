//! # afcfta-core — Foundational Types for the AfCFTA Tariff Engine
//!
//! This crate is the leaf of the workspace DAG. It defines the validated
//! primitives every other crate speaks in, plus the provider traits through
//! which the engine reads reference data it does not own.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for codes.** `CommodityCode`, `SectorCode` and
//!    `CountryCode` validate at construction. No bare strings cross a crate
//!    boundary.
//!
//! 2. **Read-only reference entities.** [`Country`] and [`SectorInfo`] are
//!    loaded once by the caller and only ever borrowed by the engine.
//!
//! 3. **Injected providers.** [`ReferenceDataProvider`],
//!    [`TariffScheduleProvider`] and [`LevyRateProvider`] return `Option` so
//!    the engine, not the store, decides the documented defaults.
//!
//! 4. **Explicit reference year.** Phase-out arithmetic takes a
//!    [`ReferenceYear`] parameter. Nothing in the engine reads the wall clock.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `afcfta-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod country;
pub mod error;
pub mod identity;
pub mod provider;
pub mod sector;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use country::{Country, Region, RegionalBloc, RiskLevel};
pub use error::{EngineError, EngineResult};
pub use identity::{CommodityCode, CountryCode, SectorCode};
pub use provider::{LevyRate, LevyRateProvider, ReferenceDataProvider, TariffScheduleProvider};
pub use sector::{HsSection, SectorInfo};
pub use temporal::{ReferenceYear, AFCFTA_EPOCH_YEAR};
