//! Display band around a forecast
//!
//! The band is a fixed relative envelope, not a statistical interval.

use forecast_spi::{BandPoint, ForecastBand, ForecastResult};

/// Build a `±width_pct` envelope around every forecast point.
///
/// Bounds are ordered so `lower <= upper` holds for negative forecasts too.
pub fn forecast_band(result: &ForecastResult, width_pct: f64) -> ForecastBand {
    let points = result
        .points()
        .iter()
        .map(|p| {
            let a = p.predicted_sales * (1.0 - width_pct);
            let b = p.predicted_sales * (1.0 + width_pct);
            BandPoint {
                date: p.date,
                lower: a.min(b),
                forecast: p.predicted_sales,
                upper: a.max(b),
            }
        })
        .collect();

    ForecastBand { points, width_pct }
}
