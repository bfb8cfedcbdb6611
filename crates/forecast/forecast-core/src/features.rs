//! Training frame for the offline model fit
//!
//! Each row describes one historical day the way the rollout would have seen
//! it the evening before: `lag_1` is the previous day, `lag_7` the day seven
//! back, and `rolling_7` the mean of the seven days before the target.
//! The legacy feature frame included the target day in that mean; this one
//! does not, so training matches what the rollout sees at step one.

use chrono::NaiveDate;
use forecast_spi::FeatureVector;
use sales_spi::{day_of_week, SalesSeries};
use serde::{Deserialize, Serialize};

use crate::engine::CONTEXT_WINDOW;

/// One supervised example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingRow {
    pub date: NaiveDate,
    pub features: FeatureVector,
    pub target: f64,
}

/// Build supervised rows for every day that has seven days of history behind it.
pub fn training_rows(series: &SalesSeries) -> Vec<TrainingRow> {
    let records = series.records();

    (CONTEXT_WINDOW..records.len())
        .map(|t| {
            let window = &records[t - CONTEXT_WINDOW..t];
            let rolling_7 = window.iter().map(|r| r.sales).sum::<f64>() / CONTEXT_WINDOW as f64;
            let date = records[t].date;

            TrainingRow {
                date,
                features: FeatureVector::new(
                    records[t - 1].sales,
                    records[t - CONTEXT_WINDOW].sales,
                    rolling_7,
                    day_of_week(date),
                ),
                target: records[t].sales,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RolloutState;

    fn series(values: &[f64]) -> SalesSeries {
        SalesSeries::from_daily_values(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), values)
            .unwrap()
    }

    #[test]
    fn test_no_rows_without_seven_days() {
        assert!(training_rows(&series(&[1.0; 7])).is_empty());
    }

    #[test]
    fn test_row_count() {
        assert_eq!(training_rows(&series(&[1.0; 10])).len(), 3);
    }

    #[test]
    fn test_first_row_features() {
        let rows = training_rows(&series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]));
        let row = rows[0];
        assert_eq!(row.target, 8.0);
        assert_eq!(row.features.lag_1, 7.0);
        assert_eq!(row.features.lag_7, 1.0);
        assert_eq!(row.features.rolling_7, 4.0);
        // 2024-01-08 is a Monday
        assert_eq!(row.features.day_of_week, 0);
    }

    #[test]
    fn test_rolling_mean_excludes_target_day() {
        let quiet = training_rows(&series(&[7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0]));
        let spike = training_rows(&series(&[7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0, 70.0]));
        assert_eq!(quiet[0].features.rolling_7, 7.0);
        assert_eq!(spike[0].features.rolling_7, 7.0);
        assert_eq!(spike[0].target, 70.0);
    }

    #[test]
    fn test_last_row_matches_rollout_seed_shape() {
        // The rollout's first step and a training row built from the same
        // history must describe the next day identically.
        let values = [3.0, 5.0, 4.0, 6.0, 8.0, 7.0, 9.0, 11.0, 10.0];
        let full = series(&values);
        let history = series(&values[..8]);

        let row = *training_rows(&full).last().unwrap();
        let seed = RolloutState::seed(&history).unwrap();

        assert_eq!(seed.features(row.date), row.features);
    }
}
