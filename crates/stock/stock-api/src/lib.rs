//! Stock Recommendation API
//!
//! Dashboard defaults for the stock inputs.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use stock_spi::{
    Result, StockCalculator, StockError, StockParams, StockRecommendation, StockStatus,
    MAX_SAFETY_PCT,
};

/// Starting values for the stock inputs before the user edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockDefaults {
    pub current_stock: u64,
    pub lead_time_days: usize,
    pub safety_pct: f64,
}

impl Default for StockDefaults {
    fn default() -> Self {
        Self {
            current_stock: 50,
            lead_time_days: 7,
            safety_pct: 15.0,
        }
    }
}

impl StockDefaults {
    /// Validate into calculator input.
    pub fn to_params(&self) -> Result<StockParams> {
        StockParams::new(self.current_stock, self.lead_time_days, self.safety_pct)
    }

    /// Apply optional overrides, keeping the defaults for anything unset.
    pub fn with_overrides(
        &self,
        current_stock: Option<u64>,
        lead_time_days: Option<usize>,
        safety_pct: Option<f64>,
    ) -> Result<StockParams> {
        StockParams::new(
            current_stock.unwrap_or(self.current_stock),
            lead_time_days.unwrap_or(self.lead_time_days),
            safety_pct.unwrap_or(self.safety_pct),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = StockDefaults::default().to_params().unwrap();
        assert_eq!(params.current_stock(), 50);
        assert_eq!(params.lead_time_days(), 7);
        assert_eq!(params.safety_pct(), 15.0);
    }

    #[test]
    fn test_overrides() {
        let params = StockDefaults::default()
            .with_overrides(Some(10), None, Some(0.0))
            .unwrap();
        assert_eq!(params.current_stock(), 10);
        assert_eq!(params.lead_time_days(), 7);
        assert_eq!(params.safety_pct(), 0.0);
    }

    #[test]
    fn test_invalid_override() {
        let result = StockDefaults::default().with_overrides(None, Some(0), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_partial_json() {
        let defaults: StockDefaults = serde_json::from_str(r#"{"lead_time_days": 5}"#).unwrap();
        assert_eq!(defaults.lead_time_days, 5);
        assert_eq!(defaults.current_stock, 50);
    }
}
