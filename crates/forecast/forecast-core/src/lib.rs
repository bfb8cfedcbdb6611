//! Forecast Core
//!
//! Recursive rollout engine, the linear demand model with its offline
//! trainer, and the summaries drawn from a finished forecast.

pub mod band;
pub mod engine;
pub mod features;
pub mod fn_model;
pub mod linear;
pub mod slot;
pub mod summary;

// Re-export SPI types for implementations
pub use forecast_spi::{DemandModel, FeatureVector, ForecastError, ForecastResult, Result};

// Re-export main types
pub use band::forecast_band;
pub use engine::{forecast, ForecastEngine, RolloutState, CONTEXT_WINDOW, MIN_HISTORY};
pub use features::{training_rows, TrainingRow};
pub use fn_model::FnModel;
pub use linear::{train_linear_model, LinearDemandModel, TrainingSummary};
pub use slot::ModelSlot;
pub use summary::ForecastSummary;
