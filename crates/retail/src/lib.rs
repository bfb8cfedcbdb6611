//! # retail
//!
//! Retail demand core. Forecasts the next two weeks of sales from a daily
//! history, flags days that stray from their trailing average, and turns the
//! forecast into a reorder recommendation.
//!
//! ## Example
//!
//! ```rust,ignore
//! use retail::prelude::*;
//!
//! let series = load_sales("data/sales.csv".as_ref(), LoadConfig::default())?;
//! let model = ModelSlot::new("models/model.json").get()?;
//!
//! let result = retail::forecast(&series, model.as_ref())?;
//! let anomalies = retail::detect_anomalies(&series);
//! let advice = retail::recommend_stock(&result, &StockParams::new(50, 7, 15.0)?);
//! ```

mod config;
mod error;
mod report;

pub use config::RetailConfig;
pub use error::{Result, RetailError};
pub use report::DashboardReport;

/// Module facades, for anything beyond the three entry points.
pub use anomaly_facade as anomaly;
pub use forecast_facade as forecasting;
pub use sales_facade as sales;
pub use stock_facade as stock;

use anomaly_facade::AnomalyRecord;
use forecast_facade::{DemandModel, ForecastError, ForecastResult};
use sales_facade::SalesSeries;
use stock_facade::{StockParams, StockRecommendation};

/// Fourteen-day recursive forecast following the last historical date.
pub fn forecast(
    series: &SalesSeries,
    model: &dyn DemandModel,
) -> std::result::Result<ForecastResult, ForecastError> {
    forecast_facade::forecast(series, model)
}

/// Days whose sales deviate more than 30% from the trailing 7-day mean.
pub fn detect_anomalies(series: &SalesSeries) -> Vec<AnomalyRecord> {
    anomaly_facade::detect_anomalies(series)
}

/// Reorder advice covering lead-time demand plus the safety margin.
pub fn recommend_stock(forecast: &ForecastResult, params: &StockParams) -> StockRecommendation {
    stock_facade::recommend_stock(forecast, params)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DashboardReport, RetailConfig, RetailError};
    pub use anomaly_facade::{AnomalyRecord, AnomalyReport};
    pub use forecast_facade::{
        DemandModel, FeatureVector, ForecastError, ForecastResult, LinearDemandModel, ModelSlot,
    };
    pub use sales_facade::{load_sales, LoadConfig, SalesRecord, SalesSeries};
    pub use stock_facade::{StockParams, StockRecommendation, StockStatus};
}
