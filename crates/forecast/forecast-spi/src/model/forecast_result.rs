//! Forecast output model

use chrono::NaiveDate;
use sales_spi::SalesRecord;
use serde::{Deserialize, Serialize};

/// Predicted demand for one future date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Raw model output; may be negative or fractional
    pub predicted_sales: f64,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, predicted_sales: f64) -> Self {
        Self {
            date,
            predicted_sales,
        }
    }
}

/// A complete forecast: future points plus the trailing history used as context.
///
/// Fields are private so a result cannot be edited after the engine builds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    points: Vec<ForecastPoint>,
    context: Vec<SalesRecord>,
}

impl ForecastResult {
    pub fn new(points: Vec<ForecastPoint>, context: Vec<SalesRecord>) -> Self {
        Self { points, context }
    }

    /// Future points in date order.
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Trailing historical records the rollout was seeded from.
    pub fn context(&self) -> &[SalesRecord] {
        &self.context
    }

    /// Number of forecast points.
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Predicted values in date order.
    pub fn predictions(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted_sales).collect()
    }

    /// Forecast dates in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Total predicted demand over the first `days` points, clamped to the horizon.
    pub fn demand_over(&self, days: usize) -> f64 {
        self.points
            .iter()
            .take(days)
            .map(|p| p.predicted_sales)
            .sum()
    }

    /// Last historical date before the forecast starts.
    pub fn last_known_date(&self) -> Option<NaiveDate> {
        self.context.last().map(|r| r.date)
    }
}
