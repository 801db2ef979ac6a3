//! Pack-specific error types.
//!
//! Structured errors for loading and validating reference data. Every
//! error carries the file path or the offending table key.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a [`crate::ReferenceData`].
#[derive(Debug, Error)]
pub enum PackError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The same country appears twice in one overlay.
    #[error("duplicate country profile: {code}")]
    DuplicateCountry { code: String },

    /// A table entry failed validation.
    #[error("invalid {table} entry {key:?}: {reason}")]
    InvalidEntry {
        table: &'static str,
        key: String,
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let err = PackError::FileNotFound {
            path: PathBuf::from("/tmp/missing.yaml"),
        };
        assert!(format!("{err}").contains("/tmp/missing.yaml"));
    }

    #[test]
    fn invalid_entry_display() {
        let err = PackError::InvalidEntry {
            table: "mfn_adjustments",
            key: "NGA".to_string(),
            reason: "factor must be positive".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("mfn_adjustments"));
        assert!(msg.contains("NGA"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn duplicate_country_display() {
        let err = PackError::DuplicateCountry {
            code: "KEN".to_string(),
        };
        assert!(format!("{err}").contains("KEN"));
    }
}
