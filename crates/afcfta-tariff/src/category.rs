//! # Tariff Dismantling Categories
//!
//! AfCFTA schedules place each tariff line in a category that fixes how
//! fast its duty falls to zero:
//!
//! | Category | Treatment |
//! |----------|-----------|
//! | A | Liberalized immediately |
//! | B | Linear phase-out over 5 years |
//! | C | Linear phase-out over 10 years (sensitive products) |
//! | D | Linear phase-out over 13 years, LDC destinations only |
//!
//! [`classify_sector`] is the policy table mapping a chapter to its
//! default category. Its boundaries drive phase-out timing and must not
//! drift.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use afcfta_core::{EngineError, SectorCode};

/// Tariff dismantling category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DismantlingCategory {
    /// Immediate liberalization.
    A,
    /// Five-year linear phase-out.
    B,
    /// Ten-year linear phase-out.
    C,
    /// Thirteen-year linear phase-out for LDC destinations.
    D,
}

impl DismantlingCategory {
    /// Single-letter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl std::fmt::Display for DismantlingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DismantlingCategory {
    type Err = EngineError;

    /// Parse `A`–`D`, case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(EngineError::UnrecognizedDismantlingCategory {
                field: "category",
                value: s.to_string(),
                reason: "expected one of A, B, C, D".to_string(),
            }),
        }
    }
}

/// Default dismantling category for an HS chapter.
///
/// 01–24 ⇒ C, 28–40 ⇒ B, 50–63 ⇒ B, 72–85 ⇒ A, 86–89 ⇒ B, otherwise B.
pub fn classify_sector(sector: &SectorCode) -> DismantlingCategory {
    match sector.chapter() {
        1..=24 => DismantlingCategory::C,
        28..=40 => DismantlingCategory::B,
        50..=63 => DismantlingCategory::B,
        72..=85 => DismantlingCategory::A,
        86..=89 => DismantlingCategory::B,
        _ => DismantlingCategory::B,
    }
}
