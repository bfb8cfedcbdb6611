//! Data models for anomaly detection.

mod anomaly_record;
mod anomaly_report;

pub use anomaly_record::{AnomalyDirection, AnomalyRecord};
pub use anomaly_report::AnomalyReport;
