//! Model module containing data structures

mod feature_vector;
mod forecast_band;
mod forecast_result;

pub use feature_vector::{FeatureVector, FEATURE_NAMES};
pub use forecast_band::{BandPoint, ForecastBand};
pub use forecast_result::{ForecastPoint, ForecastResult};
