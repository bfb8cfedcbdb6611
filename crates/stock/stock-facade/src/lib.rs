//! Stock Recommendation Facade
//!
//! Unified re-exports for the stock module:
//! - `StockParams`, `StockRecommendation` and the calculator trait from SPI
//! - `StockDefaults` from API
//! - `recommend_stock` and `LeadTimeCalculator` from Core

// Re-export everything from SPI
pub use stock_spi::*;

// Re-export everything from API
pub use stock_api::*;

// Re-export everything from Core
pub use stock_core::*;
