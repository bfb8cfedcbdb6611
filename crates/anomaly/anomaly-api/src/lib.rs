//! Anomaly Detection API
//!
//! Configuration types and builders for anomaly detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    AnomalyDetector, AnomalyDirection, AnomalyError, AnomalyRecord, AnomalyReport, Result,
};

/// Default trailing window, in days.
pub const DEFAULT_WINDOW: usize = 7;

/// Default relative deviation that flags a day.
pub const DEFAULT_THRESHOLD: f64 = 0.30;

// ============================================================================
// Detector Configuration
// ============================================================================

/// Rolling deviation detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingDeviationConfig {
    /// Trailing window length, the current day included (default: 7).
    pub window: usize,
    /// Flag when `|sales - mean| > threshold * mean` (default: 0.30).
    pub threshold: f64,
}

impl Default for RollingDeviationConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RollingDeviationConfig {
    pub fn new(window: usize, threshold: f64) -> Self {
        Self { window, threshold }
    }

    pub fn builder() -> RollingDeviationConfigBuilder {
        RollingDeviationConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(AnomalyError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be a finite non-negative number".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`RollingDeviationConfig`].
#[derive(Debug, Clone, Default)]
pub struct RollingDeviationConfigBuilder {
    window: Option<usize>,
    threshold: Option<f64>,
}

impl RollingDeviationConfigBuilder {
    pub fn window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<RollingDeviationConfig> {
        let config = RollingDeviationConfig {
            window: self.window.unwrap_or(DEFAULT_WINDOW),
            threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
        };
        config.validate()?;
        Ok(config)
    }
}
