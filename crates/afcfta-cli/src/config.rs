//! Engine configuration file.
//!
//! ```yaml
//! reference_year: 2025
//! max_trade_value: "1000000000000"
//! trade_elasticity: "1.5"
//! vat_default: "18"
//! data: data/countries.yaml
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use afcfta_core::ReferenceYear;
use afcfta_scoring::DEFAULT_ELASTICITY;
use afcfta_tariff::cascade::DEFAULT_VAT_RATE;
use afcfta_tariff::MAX_TRADE_VALUE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Year phase-out rates are evaluated for. Defaults to the current UTC year.
    pub reference_year: Option<i32>,
    pub max_trade_value: Decimal,
    pub trade_elasticity: Decimal,
    /// VAT rate for destinations without a VAT entry.
    pub vat_default: Decimal,
    /// Country reference file, relative to the repository root.
    pub data: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            max_trade_value: MAX_TRADE_VALUE,
            trade_elasticity: DEFAULT_ELASTICITY,
            vat_default: DEFAULT_VAT_RATE,
            data: None,
        }
    }
}

impl EngineConfig {
    /// Read and check a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: EngineConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.max_trade_value > Decimal::ZERO,
            "max_trade_value must be positive, got {}",
            self.max_trade_value
        );
        anyhow::ensure!(
            self.trade_elasticity >= Decimal::ZERO,
            "trade_elasticity must not be negative, got {}",
            self.trade_elasticity
        );
        anyhow::ensure!(
            self.vat_default >= Decimal::ZERO,
            "vat_default must not be negative, got {}",
            self.vat_default
        );
        Ok(())
    }

    /// Configured reference year, or the current one.
    pub fn reference_year(&self) -> ReferenceYear {
        self.reference_year
            .map_or_else(ReferenceYear::current, ReferenceYear::new)
    }
}
