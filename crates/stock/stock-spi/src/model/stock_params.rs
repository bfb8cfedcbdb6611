//! Validated stock inputs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StockError};

/// Largest safety margin accepted, in percent.
pub const MAX_SAFETY_PCT: f64 = 50.0;

/// User-supplied inventory position and replenishment settings.
///
/// Built through [`StockParams::new`], so a value always satisfies
/// `lead_time_days >= 1` and `0 <= safety_pct <= 50`. Deserialization goes
/// through the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStockParams")]
pub struct StockParams {
    current_stock: u64,
    lead_time_days: usize,
    safety_pct: f64,
}

#[derive(Deserialize)]
struct RawStockParams {
    current_stock: u64,
    lead_time_days: usize,
    safety_pct: f64,
}

impl TryFrom<RawStockParams> for StockParams {
    type Error = StockError;

    fn try_from(raw: RawStockParams) -> Result<Self> {
        Self::new(raw.current_stock, raw.lead_time_days, raw.safety_pct)
    }
}

impl StockParams {
    pub fn new(current_stock: u64, lead_time_days: usize, safety_pct: f64) -> Result<Self> {
        if lead_time_days < 1 {
            return Err(StockError::InvalidParameter {
                name: "lead_time_days".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if !safety_pct.is_finite() || !(0.0..=MAX_SAFETY_PCT).contains(&safety_pct) {
            return Err(StockError::InvalidParameter {
                name: "safety_pct".to_string(),
                reason: format!("must be between 0 and {}", MAX_SAFETY_PCT),
            });
        }

        Ok(Self {
            current_stock,
            lead_time_days,
            safety_pct,
        })
    }

    pub fn current_stock(&self) -> u64 {
        self.current_stock
    }

    pub fn lead_time_days(&self) -> usize {
        self.lead_time_days
    }

    pub fn safety_pct(&self) -> f64 {
        self.safety_pct
    }

    /// Same settings with a different stock level.
    pub fn with_current_stock(self, current_stock: u64) -> Self {
        Self {
            current_stock,
            ..self
        }
    }
}
