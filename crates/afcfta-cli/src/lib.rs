//! # afcfta-cli — Command-Line Front End for the Tariff Engine
//!
//! Provides the `afcfta` binary.
//!
//! ## Subcommands
//!
//! - `afcfta quote`: MFN vs AfCFTA comparison for one consignment.
//! - `afcfta cascade`: levy/VAT journal for one destination.
//! - `afcfta schedule`: year-by-year phase-out projection.
//! - `afcfta score`: ICP score for an origin/destination pair.
//! - `afcfta opportunities`: destination ranking for an exporter.
//! - `afcfta trade-creation`: import growth expected from a tariff cut.
//! - `afcfta sectors`: the HS chapter table.
//!
//! ```bash
//! afcfta quote --code 0101.21 --origin GHA --dest KEN --value 100000 --year 2025
//! afcfta --format json score --origin GHA --dest NGA
//! afcfta schedule --base-rate 15 --category C --from 2021 --to 2031
//! ```
//!
//! Reference data is read once at startup (see [`context::EngineContext`])
//! and shared read-only by every handler.

pub mod cascade;
pub mod config;
pub mod context;
pub mod opportunities;
pub mod output;
pub mod quote;
pub mod schedule;
pub mod score;
pub mod sectors;
pub mod trade_creation;

use std::path::{Path, PathBuf};

/// Country reference file shipped with the repository.
pub const DEFAULT_DATA_FILE: &str = "data/countries.yaml";

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `repo_root` resolves there; otherwise it stays relative to the current
/// directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_returned_as_is() {
        let result = resolve_path(Path::new("/etc/afcfta.yaml"), Path::new("/repo"));
        assert_eq!(result, PathBuf::from("/etc/afcfta.yaml"));
    }

    #[test]
    fn relative_path_prefers_repo_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("levies.yaml"), b"levies: {}").unwrap();
        let result = resolve_path(Path::new("levies.yaml"), dir.path());
        assert_eq!(result, dir.path().join("levies.yaml"));
    }

    #[test]
    fn missing_relative_path_stays_relative() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_path(Path::new("missing.yaml"), dir.path());
        assert_eq!(result, PathBuf::from("missing.yaml"));
    }
}
