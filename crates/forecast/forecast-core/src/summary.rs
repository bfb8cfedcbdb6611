//! Cumulative demand figures shown next to the forecast chart

use forecast_spi::ForecastResult;
use serde::{Deserialize, Serialize};

/// Predicted demand over the next 3, 7 and 14 days.
///
/// Each figure is a prefix sum clamped to the forecast horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub next_3_days: f64,
    pub next_7_days: f64,
    pub next_14_days: f64,
}

impl ForecastSummary {
    pub fn from_result(result: &ForecastResult) -> Self {
        Self {
            next_3_days: result.demand_over(3),
            next_7_days: result.demand_over(7),
            next_14_days: result.demand_over(14),
        }
    }
}

impl From<&ForecastResult> for ForecastSummary {
    fn from(result: &ForecastResult) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use forecast_spi::ForecastPoint;

    fn result(len: usize) -> ForecastResult {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let points = (0..len)
            .map(|i| ForecastPoint::new(start + chrono::Days::new(i as u64), (i + 1) as f64))
            .collect();
        ForecastResult::new(points, Vec::new())
    }

    #[test]
    fn test_summary_prefix_sums() {
        let summary = ForecastSummary::from_result(&result(14));
        assert_eq!(summary.next_3_days, 6.0);
        assert_eq!(summary.next_7_days, 28.0);
        assert_eq!(summary.next_14_days, 105.0);
    }

    #[test]
    fn test_summary_short_horizon() {
        let summary = ForecastSummary::from(&result(5));
        assert_eq!(summary.next_3_days, 6.0);
        assert_eq!(summary.next_7_days, 15.0);
        assert_eq!(summary.next_14_days, 15.0);
    }
}
