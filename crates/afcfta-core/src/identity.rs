//! # Code Newtypes
//!
//! Validated wrappers for the three codes that flow through every
//! calculation. You cannot pass a [`SectorCode`] where a [`CommodityCode`]
//! is expected, and neither can exist in an unvalidated state.
//!
//! ## Formats
//!
//! - [`CommodityCode`]: HS subheading, exactly 6 ASCII digits. `.` and
//!   space separators (`0101.21`, `0101 21`) are stripped first.
//! - [`SectorCode`]: HS chapter, exactly 2 ASCII digits.
//! - [`CountryCode`]: ISO 3166-1 alpha-3, stored upper-case.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Implements `Deserialize` by routing the raw string through `new()` so
/// invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// CommodityCode
// ---------------------------------------------------------------------------

/// A six-digit Harmonized System commodity code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CommodityCode(String);

impl_validating_deserialize!(CommodityCode);

impl CommodityCode {
    /// Parse a commodity code reported against the `hs_code` field.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCommodityCode`] unless the input is
    /// exactly six digits after separators are stripped.
    pub fn new(value: impl Into<String>) -> EngineResult<Self> {
        Self::parse_field(value, "hs_code")
    }

    /// Parse a commodity code, attributing any error to `field`.
    pub fn parse_field(value: impl Into<String>, field: &'static str) -> EngineResult<Self> {
        let raw = value.into();
        let digits: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '.' && *c != ' ')
            .collect();

        if digits.is_empty() {
            return Err(EngineError::InvalidCommodityCode {
                field,
                value: raw,
                reason: "must not be empty".to_string(),
            });
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(EngineError::InvalidCommodityCode {
                field,
                value: raw,
                reason: "must contain only ASCII digits".to_string(),
            });
        }
        if digits.len() != 6 {
            return Err(EngineError::InvalidCommodityCode {
                field,
                value: raw,
                reason: format!("expected 6 digits, got {}", digits.len()),
            });
        }
        Ok(Self(digits))
    }

    /// The two-digit chapter prefix.
    pub fn sector(&self) -> SectorCode {
        // Six validated ASCII digits, so the first two always form a chapter.
        SectorCode(self.0[..2].to_string())
    }

    /// Access the six-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommodityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CommodityCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// SectorCode
// ---------------------------------------------------------------------------

/// A two-digit HS chapter ("sector").
///
/// Validity of the format says nothing about whether the chapter exists in
/// the sector table; that lookup belongs to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SectorCode(String);

impl_validating_deserialize!(SectorCode);

impl SectorCode {
    /// Parse a sector code reported against the `sector` field.
    pub fn new(value: impl Into<String>) -> EngineResult<Self> {
        Self::parse_field(value, "sector")
    }

    /// Parse a sector code, attributing any error to `field`.
    ///
    /// A single digit is left-padded (`"1"` becomes `"01"`).
    pub fn parse_field(value: impl Into<String>, field: &'static str) -> EngineResult<Self> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(EngineError::InvalidCommodityCode {
                field,
                value: raw,
                reason: "sector must be one or two ASCII digits".to_string(),
            });
        }
        match trimmed.len() {
            1 => Ok(Self(format!("0{trimmed}"))),
            2 => Ok(Self(trimmed.to_string())),
            n => Err(EngineError::InvalidCommodityCode {
                field,
                value: raw.clone(),
                reason: format!("sector must be 2 digits, got {n}"),
            }),
        }
    }

    /// Build a sector code from a chapter number in `0..=99`.
    pub fn from_chapter(chapter: u8) -> EngineResult<Self> {
        if chapter > 99 {
            return Err(EngineError::InvalidCommodityCode {
                field: "sector",
                value: chapter.to_string(),
                reason: "chapter must be in 0..=99".to_string(),
            });
        }
        Ok(Self(format!("{chapter:02}")))
    }

    /// The chapter as a number.
    pub fn chapter(&self) -> u8 {
        self.0.bytes().fold(0u8, |acc, b| acc * 10 + (b - b'0'))
    }

    /// Access the two-digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SectorCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// CountryCode
// ---------------------------------------------------------------------------

/// An ISO 3166-1 alpha-3 country code (e.g. `NGA`, `KEN`, `ZAF`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCode(String);

impl_validating_deserialize!(CountryCode);

impl CountryCode {
    /// Parse a country code reported against the `country` field.
    pub fn new(value: impl Into<String>) -> EngineResult<Self> {
        Self::parse_field(value, "country")
    }

    /// Parse a country code, attributing any error to `field`.
    ///
    /// Input is trimmed and upper-cased before validation.
    pub fn parse_field(value: impl Into<String>, field: &'static str) -> EngineResult<Self> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(EngineError::InvalidCountryCode {
                field,
                value: raw,
                reason: "expected three ASCII letters (ISO 3166-1 alpha-3)".to_string(),
            });
        }
        Ok(Self(normalized))
    }

    /// Access the upper-case code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
