//! Error type spanning every module of the demand core.

use thiserror::Error;

use anomaly_facade::AnomalyError;
use forecast_facade::ForecastError;
use sales_facade::SalesError;
use stock_facade::StockError;

/// Any failure raised while loading, forecasting or advising.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RetailError {
    #[error(transparent)]
    Sales(#[from] SalesError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Anomaly(#[from] AnomalyError),

    #[error(transparent)]
    Stock(#[from] StockError),

    /// Configuration file missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the demand core.
pub type Result<T> = std::result::Result<T, RetailError>;
