//! Forecast band model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecast value with its lower and upper envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub date: NaiveDate,
    pub lower: f64,
    pub forecast: f64,
    pub upper: f64,
}

/// Envelope drawn around a forecast for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBand {
    /// Points in date order
    pub points: Vec<BandPoint>,
    /// Relative half-width (0.15 means ±15%)
    pub width_pct: f64,
}
