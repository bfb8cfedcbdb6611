//! Aggregate configuration for the demand core.

use std::fs;
use std::path::Path;

use anomaly_facade::RollingDeviationConfig;
use forecast_facade::{ForecastConfig, ModelConfig, TrainingConfig};
use sales_facade::LoadConfig;
use serde::{Deserialize, Serialize};
use stock_facade::StockDefaults;

use crate::error::{Result, RetailError};

/// Every tunable of the demand core in one place.
///
/// Sections left out of a JSON file keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailConfig {
    pub load: LoadConfig,
    pub forecast: ForecastConfig,
    pub model: ModelConfig,
    pub training: TrainingConfig,
    pub anomaly: RollingDeviationConfig,
    pub stock: StockDefaults,
}

impl RetailConfig {
    /// Read and validate a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| RetailError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| RetailError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.forecast.validate()?;
        self.training.validate()?;
        self.anomaly.validate()?;
        self.stock.to_params()?;
        Ok(())
    }
}
