//! Lead-time reorder calculator.

use forecast_spi::ForecastResult;
use stock_spi::{StockCalculator, StockParams, StockRecommendation};

/// Covers forecast demand over the lead time plus a percentage buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadTimeCalculator;

impl StockCalculator for LeadTimeCalculator {
    fn recommend(&self, forecast: &ForecastResult, params: &StockParams) -> StockRecommendation {
        let effective_lead_time = params.lead_time_days().min(forecast.horizon());
        if effective_lead_time < params.lead_time_days() {
            tracing::debug!(
                requested = params.lead_time_days(),
                horizon = forecast.horizon(),
                "lead time clamped to forecast horizon"
            );
        }

        let demand = forecast.demand_over(effective_lead_time);
        let safety = (demand * params.safety_pct() / 100.0).floor();
        let shortfall = (demand + safety - params.current_stock() as f64).floor();

        // `as` saturates, and NaN maps to zero.
        let recommendation = StockRecommendation {
            demand_over_lead_time: demand,
            safety_stock: safety as i64,
            recommended_reorder: shortfall.max(0.0) as u64,
            effective_lead_time,
        };

        tracing::debug!(
            demand,
            safety_stock = recommendation.safety_stock,
            reorder = recommendation.recommended_reorder,
            "stock recommendation"
        );

        recommendation
    }
}

/// Recommend a reorder quantity for `forecast` under `params`.
pub fn recommend_stock(forecast: &ForecastResult, params: &StockParams) -> StockRecommendation {
    LeadTimeCalculator.recommend(forecast, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use forecast_spi::ForecastPoint;
    use stock_spi::StockStatus;

    fn forecast(values: &[f64]) -> ForecastResult {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| ForecastPoint::new(start + Days::new(i as u64), v))
            .collect();
        ForecastResult::new(points, Vec::new())
    }

    #[test]
    fn test_basic_recommendation() {
        let result = forecast(&[10.0; 14]);
        let params = StockParams::new(50, 7, 15.0).unwrap();
        let rec = recommend_stock(&result, &params);

        assert_eq!(rec.demand_over_lead_time, 70.0);
        assert_eq!(rec.safety_stock, 10);
        assert_eq!(rec.recommended_reorder, 30);
        assert_eq!(rec.effective_lead_time, 7);
        assert_eq!(rec.status(), StockStatus::Reorder);
    }

    #[test]
    fn test_sufficient_stock() {
        let result = forecast(&[10.0; 14]);
        let params = StockParams::new(500, 7, 15.0).unwrap();
        let rec = recommend_stock(&result, &params);
        assert_eq!(rec.recommended_reorder, 0);
        assert_eq!(rec.status(), StockStatus::Sufficient);
    }

    #[test]
    fn test_lead_time_clamped_to_horizon() {
        let result = forecast(&[10.0; 14]);
        let params = StockParams::new(0, 30, 0.0).unwrap();
        let rec = recommend_stock(&result, &params);
        assert_eq!(rec.effective_lead_time, 14);
        assert_eq!(rec.demand_over_lead_time, 140.0);
        assert_eq!(rec.recommended_reorder, 140);
    }

    #[test]
    fn test_fractional_demand_floors() {
        let result = forecast(&[10.4, 10.4, 10.4]);
        let params = StockParams::new(5, 3, 15.0).unwrap();
        let rec = recommend_stock(&result, &params);

        // demand 31.2, safety floor(4.68) = 4, reorder floor(30.2) = 30
        assert_eq!(rec.safety_stock, 4);
        assert_eq!(rec.recommended_reorder, 30);
    }

    #[test]
    fn test_negative_forecast_never_negative_reorder() {
        let result = forecast(&[-5.0; 14]);
        let params = StockParams::new(0, 7, 15.0).unwrap();
        let rec = recommend_stock(&result, &params);
        assert_eq!(rec.demand_over_lead_time, -35.0);
        assert_eq!(rec.safety_stock, -6);
        assert_eq!(rec.recommended_reorder, 0);
    }

    #[test]
    fn test_empty_forecast() {
        let rec = recommend_stock(&forecast(&[]), &StockParams::new(3, 7, 15.0).unwrap());
        assert_eq!(rec.effective_lead_time, 0);
        assert_eq!(rec.demand_over_lead_time, 0.0);
        assert_eq!(rec.recommended_reorder, 0);
    }
}
