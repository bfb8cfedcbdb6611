//! Forecast Service Provider Interface
//!
//! Defines the demand model contract, the feature vector it consumes, and the
//! forecast output types.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DemandModel;
pub use error::{ForecastError, Result};
pub use model::{BandPoint, FeatureVector, ForecastBand, ForecastPoint, ForecastResult, FEATURE_NAMES};
