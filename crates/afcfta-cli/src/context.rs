//! Process-wide state assembled once at startup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use afcfta_pack::ReferenceData;
use afcfta_tariff::TariffCalculator;

use crate::config::EngineConfig;
use crate::output::OutputFormat;
use crate::{resolve_path, DEFAULT_DATA_FILE};

/// Configuration plus frozen reference data, shared by every handler.
#[derive(Debug, Clone)]
pub struct EngineContext {
    pub config: EngineConfig,
    pub data: Arc<ReferenceData>,
    pub format: OutputFormat,
}

impl EngineContext {
    /// Load the configuration and reference data.
    ///
    /// The data file is taken from `data_path`, then the config's `data`
    /// key, then the shipped [`DEFAULT_DATA_FILE`]. With none of them
    /// present only the built-in tables are available.
    pub fn load(
        config_path: Option<&Path>,
        data_path: Option<&Path>,
        repo_root: &Path,
        format: OutputFormat,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => EngineConfig::load(&resolve_path(path, repo_root))?,
            None => EngineConfig::default(),
        };

        let explicit = data_path.map(Path::to_path_buf).or_else(|| config.data.clone());
        let data = match explicit {
            Some(path) => {
                let path = resolve_path(&path, repo_root);
                ReferenceData::load(&path)
                    .with_context(|| format!("failed to load reference data {}", path.display()))?
            }
            None => {
                let shipped: PathBuf = repo_root.join(DEFAULT_DATA_FILE);
                if shipped.is_file() {
                    ReferenceData::load(&shipped).with_context(|| {
                        format!("failed to load reference data {}", shipped.display())
                    })?
                } else {
                    tracing::warn!(
                        "no country reference file found; only built-in tables are available"
                    );
                    ReferenceData::builtin()
                }
            }
        };

        Ok(Self {
            config,
            data: Arc::new(data),
            format,
        })
    }

    /// Context over the built-in tables only.
    pub fn builtin(format: OutputFormat) -> Self {
        Self {
            config: EngineConfig::default(),
            data: Arc::new(ReferenceData::builtin()),
            format,
        }
    }

    /// Replace the reference data.
    pub fn with_data(mut self, data: ReferenceData) -> Self {
        self.data = Arc::new(data);
        self
    }

    /// Tariff calculator configured from this context.
    pub fn calculator(&self) -> TariffCalculator {
        TariffCalculator::new(Arc::clone(&self.data))
            .with_max_trade_value(self.config.max_trade_value)
            .with_vat_default(self.config.vat_default)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_repo_falls_back_to_builtin_tables() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = EngineContext::load(None, None, dir.path(), OutputFormat::Json).unwrap();
        assert_eq!(ctx.data.country_count(), 0);
    }

    #[test]
    fn explicit_data_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("extra.yaml"),
            "countries:\n  - code: BWA\n    name: Botswana\n    region: southern\n    population: 2600000\n    gdp_billion_usd: 19.4\n    gdp_per_capita_usd: 7250\n",
        )
        .unwrap();
        let ctx = EngineContext::load(
            None,
            Some(Path::new("extra.yaml")),
            dir.path(),
            OutputFormat::Table,
        )
        .unwrap();
        assert_eq!(ctx.data.country_count(), 1);
    }

    #[test]
    fn config_feeds_the_calculator() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("afcfta.yaml"), "vat_default: 12\n").unwrap();
        let ctx = EngineContext::load(
            Some(Path::new("afcfta.yaml")),
            None,
            dir.path(),
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(ctx.config.vat_default, dec!(12));
        let bwa = afcfta_core::CountryCode::new("BWA").unwrap();
        assert_eq!(ctx.calculator().levy_schedule(&bwa, None).vat.rate, dec!(12));
    }

    #[test]
    fn broken_data_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.yaml"), "countries: [ {").unwrap();
        let err = EngineContext::load(
            None,
            Some(Path::new("bad.yaml")),
            dir.path(),
            OutputFormat::Json,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to load reference data"));
    }
}
