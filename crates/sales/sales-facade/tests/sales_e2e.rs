//! End-to-end tests for the sales module
//!
//! Tests complete load workflows using only the facade's API.

use std::io::Write;

use sales_facade::{load_sales, LoadConfig, SalesSeries};

fn two_weeks_csv() -> String {
    let mut csv = String::from("date,sales\n");
    for day in 1..=14 {
        csv.push_str(&format!("2024-04-{:02},{}\n", day, 20 + day % 3));
    }
    csv
}

#[test]
fn e2e_csv_to_json_round_trip() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(two_weeks_csv().as_bytes()).unwrap();
    file.flush().unwrap();

    let series = load_sales(file.path(), LoadConfig::default()).unwrap();
    assert_eq!(series.len(), 14);

    // Serialized form is the plain record array and re-validates on the way in.
    let json = serde_json::to_string(&series).unwrap();
    let back: SalesSeries = serde_json::from_str(&json).unwrap();
    assert_eq!(back, series);
}

#[test]
fn e2e_tail_feeds_forecast_context() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(two_weeks_csv().as_bytes()).unwrap();
    file.flush().unwrap();

    let series = load_sales(file.path(), LoadConfig::default()).unwrap();
    let tail = series.tail(7);

    assert_eq!(tail.len(), 7);
    assert_eq!(tail[6], *series.last().unwrap());
    assert!(tail.windows(2).all(|w| w[0].date < w[1].date));
}
