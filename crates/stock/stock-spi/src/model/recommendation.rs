//! Reorder recommendation.

use serde::{Deserialize, Serialize};

/// Whether stock on hand covers lead-time demand plus the safety buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Reorder,
    Sufficient,
}

/// Reorder advice derived from a forecast. Recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockRecommendation {
    /// Predicted demand summed over the effective lead time
    pub demand_over_lead_time: f64,
    /// Buffer on top of lead-time demand, floored to whole units
    pub safety_stock: i64,
    /// Units to order, never negative
    pub recommended_reorder: u64,
    /// Lead time after clamping to the forecast horizon
    pub effective_lead_time: usize,
}

impl StockRecommendation {
    pub fn status(&self) -> StockStatus {
        if self.recommended_reorder > 0 {
            StockStatus::Reorder
        } else {
            StockStatus::Sufficient
        }
    }
}
