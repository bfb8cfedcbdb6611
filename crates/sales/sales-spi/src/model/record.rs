//! A single day of sales.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Units sold on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar date
    pub date: NaiveDate,
    /// Units sold
    pub sales: f64,
}

impl SalesRecord {
    /// Create a new record.
    pub fn new(date: NaiveDate, sales: f64) -> Self {
        Self { date, sales }
    }

    /// Day of week with Monday = 0 and Sunday = 6.
    pub fn day_of_week(&self) -> u8 {
        day_of_week(self.date)
    }
}

/// Day of week with Monday = 0 and Sunday = 6.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}
