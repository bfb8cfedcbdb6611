//! Flagged sales day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which side of the baseline a flagged day fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyDirection {
    /// Sales above the trailing average
    Spike,
    /// Sales below the trailing average
    Drop,
}

/// A day whose sales deviate from the trailing 7-day average by more than the
/// detector's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub date: NaiveDate,
    pub sales: f64,
    /// Trailing simple moving average including this day
    pub rolling_7: f64,
    /// Signed `(sales - rolling_7) / rolling_7`
    pub deviation_ratio: f64,
}

impl AnomalyRecord {
    pub fn new(date: NaiveDate, sales: f64, rolling_7: f64) -> Self {
        Self {
            date,
            sales,
            rolling_7,
            deviation_ratio: (sales - rolling_7) / rolling_7,
        }
    }

    pub fn direction(&self) -> AnomalyDirection {
        if self.deviation_ratio >= 0.0 {
            AnomalyDirection::Spike
        } else {
            AnomalyDirection::Drop
        }
    }
}
