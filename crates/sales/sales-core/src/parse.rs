//! Cell parsing shared by the CSV and JSON sources.

use chrono::NaiveDate;
use sales_api::LoadConfig;
use sales_spi::{Result, SalesError, SalesRecord, SalesSeries};

pub(crate) fn parse_date(value: &str, format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| SalesError::InvalidDate {
        value: value.to_string(),
        format: format.to_string(),
    })
}

pub(crate) fn parse_sales(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SalesError::InvalidSales(value.to_string()))
}

/// Apply load-time cleaning and build the validated series.
pub(crate) fn finish(records: Vec<SalesRecord>, config: &LoadConfig) -> Result<SalesSeries> {
    if records.is_empty() {
        return Err(SalesError::Empty);
    }

    let records = if config.drop_zero_sales {
        drop_closed_days(records)
    } else {
        records
    };

    SalesSeries::from_unsorted(records)
}

/// Remove days with zero sales (store closed).
pub fn drop_closed_days(records: Vec<SalesRecord>) -> Vec<SalesRecord> {
    let before = records.len();
    let kept: Vec<SalesRecord> = records.into_iter().filter(|r| r.sales != 0.0).collect();
    tracing::debug!(dropped = before - kept.len(), "dropped closed days");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_default_format() {
        let date = parse_date(" 2024-07-01 ", "%Y-%m-%d").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }

    #[test]
    fn test_parse_date_wrong_format() {
        let result = parse_date("01/07/2024", "%Y-%m-%d");
        assert!(matches!(result, Err(SalesError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_sales() {
        assert_eq!(parse_sales("12.5").unwrap(), 12.5);
        assert!(matches!(parse_sales("n/a"), Err(SalesError::InvalidSales(_))));
    }

    #[test]
    fn test_drop_closed_days_keeps_open_days() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let records = vec![
            SalesRecord::new(d(1), 3.0),
            SalesRecord::new(d(2), 0.0),
            SalesRecord::new(d(3), 4.0),
        ];
        let kept = drop_closed_days(records);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.sales > 0.0));
    }

    #[test]
    fn test_finish_empty_is_error() {
        let result = finish(Vec::new(), &LoadConfig::default());
        assert_eq!(result.unwrap_err(), SalesError::Empty);
    }
}
