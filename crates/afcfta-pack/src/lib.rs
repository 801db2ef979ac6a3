//! # afcfta-pack — Reference-Data Pack
//!
//! Encodes the read-only policy tables the tariff engine consults, and
//! freezes them into a single [`ReferenceData`] value at process start:
//!
//! - **Sectors** (`sectors.rs`): the HS chapter table, one row per chapter
//!   01–97 except the reserved chapter 77.
//! - **MFN** (`mfn.rs`): sector base rates and per-destination adjustment
//!   factors.
//! - **Levies** (`levies.rs`): per-country VAT, statistical fee, community
//!   levy and regional levy, each with its legal citation.
//! - **Reference** (`reference.rs`): the frozen store implementing every
//!   provider trait from `afcfta-core`, plus YAML overlays for country
//!   profiles and rate overrides.
//!
//! ## Crate Policy
//!
//! - Depends only on `afcfta-core` internally.
//! - `ReferenceData` has no interior mutability. Build it once, wrap it in
//!   `Arc`, share it.

pub mod error;
pub mod levies;
pub mod mfn;
pub mod parser;
pub mod reference;
pub mod sectors;

pub use error::{PackError, PackResult};
pub use levies::CountryLevies;
pub use reference::{ReferenceData, ReferenceDataFile};
