//! Sales data error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or loading a sales series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    /// Dates went backwards
    #[error("Dates must be strictly increasing: {previous} is followed by {next}")]
    NonIncreasingDate { previous: NaiveDate, next: NaiveDate },

    /// Same calendar date appeared twice
    #[error("Duplicate date: {0}")]
    DuplicateDate(NaiveDate),

    /// Sales below zero
    #[error("Negative sales on {date}: {sales}")]
    NegativeSales { date: NaiveDate, sales: f64 },

    /// NaN or infinite sales
    #[error("Non-finite sales on {0}")]
    NonFiniteSales(NaiveDate),

    /// Failed to open or read the source
    #[error("Read error: {0}")]
    ReadError(String),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Date cell did not match the configured format
    #[error("Invalid date '{value}': expected format {format}")]
    InvalidDate { value: String, format: String },

    /// Sales cell is not a number
    #[error("Invalid sales value: '{0}'")]
    InvalidSales(String),

    /// Header row lacks a required column
    #[error("Column '{0}' not found")]
    MissingColumn(String),

    /// Consecutive day fell outside the supported calendar
    #[error("Date {offset} days after {start} is out of calendar range")]
    DateOutOfRange { start: NaiveDate, offset: usize },

    /// Source held no records
    #[error("No sales records found")]
    Empty,
}

/// Result type for sales data operations.
pub type Result<T> = std::result::Result<T, SalesError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_non_increasing_date_display() {
        let error = SalesError::NonIncreasingDate {
            previous: date(5),
            next: date(4),
        };
        assert_eq!(
            error.to_string(),
            "Dates must be strictly increasing: 2024-03-05 is followed by 2024-03-04"
        );
    }

    #[test]
    fn test_duplicate_date_display() {
        let error = SalesError::DuplicateDate(date(1));
        assert_eq!(error.to_string(), "Duplicate date: 2024-03-01");
    }

    #[test]
    fn test_negative_sales_display() {
        let error = SalesError::NegativeSales {
            date: date(2),
            sales: -3.5,
        };
        assert_eq!(error.to_string(), "Negative sales on 2024-03-02: -3.5");
    }

    #[test]
    fn test_invalid_date_display() {
        let error = SalesError::InvalidDate {
            value: "03/02/2024".to_string(),
            format: "%Y-%m-%d".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '03/02/2024': expected format %Y-%m-%d"
        );
    }

    #[test]
    fn test_missing_column_display() {
        let error = SalesError::MissingColumn("sales".to_string());
        assert_eq!(error.to_string(), "Column 'sales' not found");
    }

    #[test]
    fn test_date_out_of_range_display() {
        let error = SalesError::DateOutOfRange {
            start: date(1),
            offset: 3,
        };
        assert_eq!(
            error.to_string(),
            "Date 3 days after 2024-03-01 is out of calendar range"
        );
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(SalesError::Empty.to_string(), "No sales records found");
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = SalesError::CsvError("bad row".to_string());
        assert_eq!(error.clone(), error);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(SalesError::Empty);
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SalesError>();
    }
}
