//! Forecast error types

use thiserror::Error;

/// Errors that can occur while forecasting demand.
///
/// Every variant is fatal to the request that raised it; the engine never
/// returns a partial forecast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// History too short for the lag features
    #[error("Insufficient history: need at least {required} records, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// Model artifact missing or corrupt
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Model inference failed partway through the rollout
    #[error("Prediction failed at step {step}: {reason}")]
    PredictionFailure { step: usize, reason: String },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Offline model fit failed
    #[error("Training failed: {0}")]
    TrainingFailure(String),
}
