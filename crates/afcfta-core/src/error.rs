//! # Error Types — Engine Error Taxonomy
//!
//! Every user-visible failure names the offending field and the reason.
//!
//! ## Propagation Rules
//!
//! - Input-format errors (malformed codes, out-of-range values) surface
//!   immediately and are never silently defaulted.
//! - Data-completeness gaps (missing adjustment factor, missing levy rate)
//!   are NOT errors. Resolvers degrade to documented defaults instead.
//! - An unrecognized dismantling category during a quote is not fatal: the
//!   calculator falls back to the MFN rate and records a policy anomaly.
//!   [`EngineError::UnrecognizedDismantlingCategory`] is only returned when
//!   a category string is parsed on its own.

use rust_decimal::Decimal;
use thiserror::Error;

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;

/// Top-level error type for the tariff and scoring engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Commodity code is not exactly six ASCII digits.
    #[error("invalid commodity code in field `{field}`: {value:?} ({reason})")]
    InvalidCommodityCode {
        /// Request field that carried the code.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The two-digit sector prefix is not in the HS sector table.
    #[error("unknown sector in field `{field}`: {sector:?} is not an HS chapter")]
    UnknownSector {
        /// Request field that carried the sector.
        field: &'static str,
        /// The two-digit prefix that failed lookup.
        sector: String,
    },

    /// Country code is not a three-letter ISO 3166-1 alpha-3 code.
    #[error("invalid country code in field `{field}`: {value:?} ({reason})")]
    InvalidCountryCode {
        /// Request field that carried the code (`origin`, `destination`, ...).
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Merchandise value is non-positive or above the configured ceiling.
    #[error("invalid trade value in field `{field}`: {value} ({reason})")]
    InvalidTradeValue {
        /// Request field that carried the value.
        field: &'static str,
        /// The rejected amount.
        value: Decimal,
        /// Why it was rejected.
        reason: String,
    },

    /// Category string is outside {A, B, C, D}.
    #[error("unrecognized dismantling category in field `{field}`: {value:?} ({reason})")]
    UnrecognizedDismantlingCategory {
        /// Request field that carried the category.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A rate input is negative.
    #[error("invalid rate in field `{field}`: {value} ({reason})")]
    InvalidRate {
        /// Request field that carried the rate.
        field: &'static str,
        /// The rejected rate, rendered as text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Projection year range is inverted or too long.
    #[error("invalid year range {from}..={to}: {reason}")]
    InvalidYearRange {
        /// First year requested.
        from: i32,
        /// Last year requested.
        to: i32,
        /// Why it was rejected.
        reason: String,
    },
}

impl EngineError {
    /// The request field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidCommodityCode { field, .. }
            | Self::UnknownSector { field, .. }
            | Self::InvalidCountryCode { field, .. }
            | Self::InvalidTradeValue { field, .. }
            | Self::UnrecognizedDismantlingCategory { field, .. }
            | Self::InvalidRate { field, .. } => field,
            Self::InvalidYearRange { .. } => "year_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_reason() {
        let err = EngineError::InvalidCountryCode {
            field: "destination",
            value: "N1G".to_string(),
            reason: "expected three ASCII letters".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("destination"));
        assert!(msg.contains("N1G"));
        assert!(msg.contains("three ASCII letters"));
    }

    #[test]
    fn field_accessor_covers_every_variant() {
        let unknown = EngineError::UnknownSector {
            field: "hs_code",
            sector: "77".to_string(),
        };
        assert_eq!(unknown.field(), "hs_code");

        let range = EngineError::InvalidYearRange {
            from: 2030,
            to: 2025,
            reason: "from is after to".to_string(),
        };
        assert_eq!(range.field(), "year_range");
        assert!(range.to_string().contains("2030"));
    }

    #[test]
    fn trade_value_error_renders_decimal() {
        let err = EngineError::InvalidTradeValue {
            field: "value",
            value: Decimal::new(-500, 2),
            reason: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("-5.00"));
    }
}
