//! Anomaly report consumed by the dashboard.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::anomaly_record::{AnomalyDirection, AnomalyRecord};

/// Flagged records plus the headline counts shown above the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub records: Vec<AnomalyRecord>,
    pub total_anomalies: usize,
    /// Distinct calendar days among the records
    pub affected_days: usize,
}

impl AnomalyReport {
    pub fn new(records: Vec<AnomalyRecord>) -> Self {
        let affected_days = records.iter().map(|r| r.date).collect::<BTreeSet<_>>().len();
        Self {
            total_anomalies: records.len(),
            affected_days,
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records on the given side of the baseline.
    pub fn count(&self, direction: AnomalyDirection) -> usize {
        self.records
            .iter()
            .filter(|r| r.direction() == direction)
            .count()
    }
}

impl From<Vec<AnomalyRecord>> for AnomalyReport {
    fn from(records: Vec<AnomalyRecord>) -> Self {
        Self::new(records)
    }
}
