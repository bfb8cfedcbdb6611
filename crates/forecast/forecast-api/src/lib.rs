//! Forecast Consumer API
//!
//! Configuration types for the forecast engine, the model artifact, and the
//! offline trainer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use forecast_spi::{
    BandPoint, DemandModel, FeatureVector, ForecastBand, ForecastError, ForecastPoint,
    ForecastResult, Result, FEATURE_NAMES,
};

/// Default number of days forecast.
pub const DEFAULT_HORIZON: usize = 14;

/// Longest horizon the engine accepts, one year of daily steps.
pub const MAX_HORIZON: usize = 366;

/// Default half-width of the display band.
pub const DEFAULT_BAND_PCT: f64 = 0.15;

/// Default model artifact location.
pub const DEFAULT_MODEL_PATH: &str = "models/model.json";

/// Configuration for the forecast rollout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future days to predict
    pub horizon: usize,
    /// Relative half-width of the display band (0.15 for ±15%)
    pub band_pct: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            band_pct: DEFAULT_BAND_PCT,
        }
    }
}

impl ForecastConfig {
    pub fn new(horizon: usize) -> Self {
        Self {
            horizon,
            ..Self::default()
        }
    }

    pub fn with_band_pct(mut self, band_pct: f64) -> Self {
        self.band_pct = band_pct;
        self
    }

    /// Check ranges before the engine is built.
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(ForecastError::InvalidParameter {
                name: "horizon".to_string(),
                reason: format!("must be between 1 and {}", MAX_HORIZON),
            });
        }
        if !self.band_pct.is_finite() || !(0.0..=1.0).contains(&self.band_pct) {
            return Err(ForecastError::InvalidParameter {
                name: "band_pct".to_string(),
                reason: "must be between 0 and 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Where the trained model artifact lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ModelConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Configuration for the offline least-squares fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// L2 penalty on the feature coefficients (not the intercept)
    pub ridge: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { ridge: 0.0 }
    }
}

impl TrainingConfig {
    pub fn new(ridge: f64) -> Self {
        Self { ridge }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.ridge.is_finite() || self.ridge < 0.0 {
            return Err(ForecastError::InvalidParameter {
                name: "ridge".to_string(),
                reason: "must be a non-negative number".to_string(),
            });
        }
        Ok(())
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, ModelConfig, TrainingConfig};
    pub use forecast_spi::{
        DemandModel, FeatureVector, ForecastError, ForecastPoint, ForecastResult, Result,
    };
}
