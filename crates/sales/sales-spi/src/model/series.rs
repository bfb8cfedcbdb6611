//! Validated, chronologically ordered sales history.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::record::SalesRecord;
use crate::error::{Result, SalesError};

/// Ordered sales history.
///
/// Dates are strictly increasing and every sales value is finite and
/// non-negative. The series is immutable once built; analysis code borrows it
/// and writes derived values into new buffers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SalesRecord>", into = "Vec<SalesRecord>")]
pub struct SalesSeries {
    records: Vec<SalesRecord>,
}

impl SalesSeries {
    /// Build a series from records that are already in date order.
    pub fn new(records: Vec<SalesRecord>) -> Result<Self> {
        validate(&records)?;
        Ok(Self { records })
    }

    /// Sort records by date, then validate.
    pub fn from_unsorted(mut records: Vec<SalesRecord>) -> Result<Self> {
        records.sort_by_key(|r| r.date);
        Self::new(records)
    }

    /// Build a daily series starting at `start`, one value per consecutive day.
    pub fn from_daily_values(start: NaiveDate, values: &[f64]) -> Result<Self> {
        let records = values
            .iter()
            .enumerate()
            .map(|(i, &sales)| {
                start
                    .checked_add_days(Days::new(i as u64))
                    .map(|date| SalesRecord::new(date, sales))
                    .ok_or(SalesError::DateOutOfRange { start, offset: i })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(records)
    }

    /// All records in date order.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sales values in date order.
    pub fn sales(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.sales).collect()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&SalesRecord> {
        self.records.last()
    }

    /// Oldest record.
    pub fn first(&self) -> Option<&SalesRecord> {
        self.records.first()
    }

    /// The trailing `n` records (fewer if the series is shorter).
    pub fn tail(&self, n: usize) -> &[SalesRecord] {
        &self.records[self.records.len().saturating_sub(n)..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }
}

impl TryFrom<Vec<SalesRecord>> for SalesSeries {
    type Error = SalesError;

    fn try_from(records: Vec<SalesRecord>) -> Result<Self> {
        Self::new(records)
    }
}

impl From<SalesSeries> for Vec<SalesRecord> {
    fn from(series: SalesSeries) -> Self {
        series.records
    }
}

impl<'a> IntoIterator for &'a SalesSeries {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate(records: &[SalesRecord]) -> Result<()> {
    for record in records {
        if !record.sales.is_finite() {
            return Err(SalesError::NonFiniteSales(record.date));
        }
        if record.sales < 0.0 {
            return Err(SalesError::NegativeSales {
                date: record.date,
                sales: record.sales,
            });
        }
    }

    for pair in records.windows(2) {
        let (previous, next) = (pair[0].date, pair[1].date);
        if next == previous {
            return Err(SalesError::DuplicateDate(next));
        }
        if next < previous {
            return Err(SalesError::NonIncreasingDate { previous, next });
        }
    }

    Ok(())
}
