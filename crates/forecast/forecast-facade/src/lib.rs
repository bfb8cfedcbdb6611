//! Forecast Facade
//!
//! Unified re-exports for the demand forecast module:
//! - `forecast_spi` - Demand model contract, feature vector, forecast output
//! - `forecast_api` - Engine, model and training configuration
//! - `forecast_core` - Rollout engine, linear model, trainer, summaries
//!
//! # Example
//!
//! ```rust,ignore
//! use forecast_facade::{forecast, ModelSlot};
//!
//! let slot = ModelSlot::new("models/model.json");
//! let model = slot.get()?;
//! let result = forecast(&series, model.as_ref())?;
//! println!("next 7 days: {}", result.demand_over(7));
//! ```

// Re-export everything from API (which includes SPI)
pub use forecast_api::*;

// Re-export core implementations
pub use forecast_core::*;

// The history type every entry point takes
pub use sales_spi::{SalesRecord, SalesSeries};
