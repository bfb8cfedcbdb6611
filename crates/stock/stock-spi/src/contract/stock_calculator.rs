//! Stock calculator trait definition.

use forecast_spi::ForecastResult;

use crate::model::{StockParams, StockRecommendation};

/// Turns a demand forecast into a reorder recommendation.
///
/// Implementations must be pure: the same forecast and parameters always
/// give the same recommendation.
pub trait StockCalculator: Send + Sync {
    fn recommend(&self, forecast: &ForecastResult, params: &StockParams) -> StockRecommendation;
}
