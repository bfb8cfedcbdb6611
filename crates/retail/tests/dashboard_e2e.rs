//! End-to-end tests for the demand core
//!
//! CSV history in, trained model on disk, dashboard report out.

use std::io::Write;

use retail::forecasting::{train_linear_model, TrainingConfig};
use retail::prelude::*;

fn write_history(days: usize) -> tempfile::NamedTempFile {
    let pattern = [21.0, 19.0, 22.0, 24.0, 30.0, 38.0, 33.0];
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "Date,Sales").unwrap();
    for i in 0..days {
        let date = start + chrono::Days::new(i as u64);
        // one promotion day well above the weekly shape
        let sales = if i == 40 { 90.0 } else { pattern[i % 7] + (i % 3) as f64 };
        writeln!(file, "{},{}", date.format("%Y-%m-%d"), sales).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn e2e_csv_to_dashboard() {
    let file = write_history(70);
    let series = load_sales(file.path(), LoadConfig::default()).unwrap();
    assert_eq!(series.len(), 70);

    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    train_linear_model(&series, &TrainingConfig::default())
        .unwrap()
        .save(&model_path)
        .unwrap();

    let model = ModelSlot::new(&model_path).get().unwrap();
    let params = StockParams::new(50, 7, 15.0).unwrap();
    let report = DashboardReport::build(&series, model.as_ref(), &params).unwrap();

    assert_eq!(report.history_len, 70);
    assert_eq!(report.forecast.horizon(), 14);
    assert!(report
        .anomalies
        .records
        .iter()
        .any(|r| r.date == chrono::NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()));
    assert_eq!(report.stock.effective_lead_time, 7);
    assert!((report.stock.demand_over_lead_time - report.summary.next_7_days).abs() < 1e-9);

    let json = serde_json::to_value(&report).unwrap();
    for key in ["forecast", "summary", "band", "anomalies", "stock", "stock_status"] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn e2e_three_entry_points() {
    let file = write_history(21);
    let series = load_sales(file.path(), LoadConfig::default()).unwrap();
    let model = LinearDemandModel::new(0.0, [0.0, 1.0, 0.0, 0.0]);

    // lag_7 model repeats the last week
    let result = retail::forecast(&series, &model).unwrap();
    let last_week: Vec<f64> = series.tail(7).iter().map(|r| r.sales).collect();
    assert_eq!(result.predictions()[0], last_week[0]);

    let anomalies = retail::detect_anomalies(&series);
    assert!(anomalies.windows(2).all(|w| w[0].date < w[1].date));

    let params = StockParams::new(1_000_000, 30, 50.0).unwrap();
    let advice = retail::recommend_stock(&result, &params);
    assert_eq!(advice.effective_lead_time, 14);
    assert_eq!(advice.status(), StockStatus::Sufficient);
}

#[test]
fn e2e_short_history_fails_forecast_but_not_detection() {
    let file = write_history(5);
    let series = load_sales(file.path(), LoadConfig::default()).unwrap();
    let model = LinearDemandModel::new(1.0, [1.0, 0.0, 0.0, 0.0]);

    assert!(matches!(
        retail::forecast(&series, &model),
        Err(ForecastError::InsufficientHistory { .. })
    ));
    assert!(retail::detect_anomalies(&series).is_empty());
}
