//! Data models for stock recommendation.

mod recommendation;
mod stock_params;

pub use recommendation::{StockRecommendation, StockStatus};
pub use stock_params::{StockParams, MAX_SAFETY_PCT};
