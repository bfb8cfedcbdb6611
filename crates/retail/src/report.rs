//! Combined dashboard payload.

use anomaly_facade::{AnomalyDetector, AnomalyReport, RollingDeviationDetector};
use chrono::NaiveDate;
use forecast_facade::{
    forecast_band, DemandModel, ForecastBand, ForecastEngine, ForecastResult, ForecastSummary,
};
use sales_facade::SalesSeries;
use serde::{Deserialize, Serialize};
use stock_facade::{recommend_stock, StockParams, StockRecommendation, StockStatus};

use crate::config::RetailConfig;
use crate::error::Result;

/// Everything the presentation layer renders for one history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Last historical date
    pub as_of: Option<NaiveDate>,
    pub history_len: usize,
    pub forecast: ForecastResult,
    pub summary: ForecastSummary,
    pub band: ForecastBand,
    pub anomalies: AnomalyReport,
    pub stock: StockRecommendation,
    pub stock_status: StockStatus,
}

impl DashboardReport {
    /// Build with default engine and detector settings.
    pub fn build(
        series: &SalesSeries,
        model: &dyn DemandModel,
        params: &StockParams,
    ) -> Result<Self> {
        Self::build_with(series, model, params, &RetailConfig::default())
    }

    /// Build with the horizon, band width and detector settings from `config`.
    pub fn build_with(
        series: &SalesSeries,
        model: &dyn DemandModel,
        params: &StockParams,
        config: &RetailConfig,
    ) -> Result<Self> {
        let engine = ForecastEngine::new(config.forecast.clone())?;
        let detector = RollingDeviationDetector::from_config(config.anomaly.clone())?;

        let forecast = engine.forecast(series, model)?;
        let summary = ForecastSummary::from_result(&forecast);
        let band = forecast_band(&forecast, config.forecast.band_pct);
        let anomalies = AnomalyReport::new(detector.detect(series));
        let stock = recommend_stock(&forecast, params);

        tracing::info!(
            history = series.len(),
            anomalies = anomalies.total_anomalies,
            reorder = stock.recommended_reorder,
            "dashboard report built"
        );

        Ok(Self {
            as_of: series.last().map(|r| r.date),
            history_len: series.len(),
            summary,
            band,
            anomalies,
            stock_status: stock.status(),
            stock,
            forecast,
        })
    }
}
