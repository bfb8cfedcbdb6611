//! Anomaly detector trait definition.

use sales_spi::SalesSeries;

use crate::model::AnomalyRecord;

/// Anomaly detector trait.
///
/// Detection is infallible: a history too short to judge yields no records.
/// Configuration problems are reported when the detector is built.
pub trait AnomalyDetector: Send + Sync {
    /// Flagged records in chronological order.
    fn detect(&self, series: &SalesSeries) -> Vec<AnomalyRecord>;

    /// Short identifier used in logs.
    fn name(&self) -> &str {
        "detector"
    }
}

impl<D: AnomalyDetector + ?Sized> AnomalyDetector for &D {
    fn detect(&self, series: &SalesSeries) -> Vec<AnomalyRecord> {
        (**self).detect(series)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<D: AnomalyDetector + ?Sized> AnomalyDetector for Box<D> {
    fn detect(&self, series: &SalesSeries) -> Vec<AnomalyRecord> {
        (**self).detect(series)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
