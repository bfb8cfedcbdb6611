//! Anomaly detector implementations.

use anomaly_api::RollingDeviationConfig;
use anomaly_spi::{AnomalyDetector, AnomalyRecord, AnomalyReport, Result};
use sales_spi::SalesSeries;

use crate::rolling::rolling_mean;

// ============================================================================
// Rolling Deviation Detector
// ============================================================================

/// Flags days whose sales stray from the trailing moving average.
///
/// A day is flagged when `|sales - mean| > threshold * mean`, where `mean`
/// covers the day itself and its `window - 1` predecessors. Days without a
/// full window get no verdict, and a zero baseline is never flagged.
#[derive(Debug, Clone)]
pub struct RollingDeviationDetector {
    window: usize,
    threshold: f64,
}

impl RollingDeviationDetector {
    /// Create a detector, rejecting an empty window or a negative threshold.
    pub fn new(window: usize, threshold: f64) -> Result<Self> {
        Self::from_config(RollingDeviationConfig::new(window, threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: RollingDeviationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: config.window,
            threshold: config.threshold,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Detect and wrap the result with its summary counts.
    pub fn report(&self, series: &SalesSeries) -> AnomalyReport {
        AnomalyReport::new(self.detect(series))
    }
}

impl Default for RollingDeviationDetector {
    fn default() -> Self {
        let config = RollingDeviationConfig::default();
        Self {
            window: config.window,
            threshold: config.threshold,
        }
    }
}

impl AnomalyDetector for RollingDeviationDetector {
    fn detect(&self, series: &SalesSeries) -> Vec<AnomalyRecord> {
        if series.len() < self.window {
            tracing::debug!(
                records = series.len(),
                window = self.window,
                "history shorter than window, nothing to flag"
            );
            return Vec::new();
        }

        let sales = series.sales();
        let means = rolling_mean(&sales, self.window);

        let flagged: Vec<AnomalyRecord> = series
            .iter()
            .zip(means)
            .skip(self.window - 1)
            .filter_map(|(record, mean)| {
                if mean == 0.0 {
                    tracing::trace!(date = %record.date, "zero baseline, skipped");
                    return None;
                }
                ((record.sales - mean).abs() > self.threshold * mean)
                    .then(|| AnomalyRecord::new(record.date, record.sales, mean))
            })
            .collect();

        tracing::debug!(
            records = series.len(),
            anomalies = flagged.len(),
            threshold = self.threshold,
            "anomaly scan complete"
        );

        flagged
    }

    fn name(&self) -> &str {
        "rolling_deviation"
    }
}

/// Scan `series` with the default 7-day window and 30% threshold.
pub fn detect_anomalies(series: &SalesSeries) -> Vec<AnomalyRecord> {
    RollingDeviationDetector::default().detect(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly_spi::{AnomalyDirection, AnomalyError};
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> SalesSeries {
        SalesSeries::from_daily_values(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), values)
            .unwrap()
    }

    #[test]
    fn test_constant_series_has_no_anomalies() {
        assert!(detect_anomalies(&series(&[20.0; 10])).is_empty());
    }

    #[test]
    fn test_spike_is_flagged() {
        let mut values = vec![20.0; 10];
        values.push(40.0);
        let flagged = detect_anomalies(&series(&values));

        assert_eq!(flagged.len(), 1);
        let record = flagged[0];
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
        assert_eq!(record.sales, 40.0);
        assert!((record.rolling_7 - 160.0 / 7.0).abs() < 1e-10);
        assert!((record.deviation_ratio - 0.75).abs() < 1e-10);
        assert_eq!(record.direction(), AnomalyDirection::Spike);
    }

    #[test]
    fn test_spike_absorbed_by_later_means() {
        // Once the spike sits inside the window, plain 20s fall 12.5% below
        // the raised mean, which is under the threshold.
        let mut values = vec![20.0; 10];
        values.push(40.0);
        values.extend([20.0; 6]);
        let flagged = detect_anomalies(&series(&values));
        assert_eq!(flagged.len(), 1);
    }

    #[test]
    fn test_drop_is_flagged() {
        let mut values = vec![30.0; 8];
        values.push(5.0);
        let flagged = detect_anomalies(&series(&values));
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].direction(), AnomalyDirection::Drop);
    }

    #[test]
    fn test_first_six_never_flagged() {
        // Wild swings in the first six days have no verdict.
        let values = [1.0, 100.0, 1.0, 100.0, 1.0, 100.0, 50.0, 50.0];
        let flagged = detect_anomalies(&series(&values));
        let first_judged = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert!(flagged.iter().all(|r| r.date >= first_judged));
    }

    #[test]
    fn test_short_series_is_empty() {
        assert!(detect_anomalies(&series(&[5.0, 50.0, 5.0])).is_empty());
        assert!(detect_anomalies(&series(&[])).is_empty());
    }

    #[test]
    fn test_zero_baseline_never_flagged() {
        let flagged = detect_anomalies(&series(&[0.0; 9]));
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_threshold_is_strict() {
        // mean 10, last day deviates by exactly half of it
        let values = [10.0, 5.0, 10.0, 15.0];
        let detector = RollingDeviationDetector::new(4, 0.5).unwrap();
        assert!(detector.detect(&series(&values)).is_empty());

        let looser = RollingDeviationDetector::new(4, 0.49).unwrap();
        assert_eq!(looser.detect(&series(&values)).len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            RollingDeviationDetector::new(0, 0.3),
            Err(AnomalyError::InvalidParameter { .. })
        ));
        assert!(RollingDeviationDetector::new(7, -1.0).is_err());
    }

    #[test]
    fn test_custom_window() {
        let detector = RollingDeviationDetector::new(3, 0.3).unwrap();
        let flagged = detector.detect(&series(&[10.0, 10.0, 10.0, 30.0]));
        assert_eq!(flagged.len(), 1);
    }

    #[test]
    fn test_report_counts() {
        let mut values = vec![20.0; 10];
        values.push(40.0);
        let report = RollingDeviationDetector::default().report(&series(&values));
        assert_eq!(report.total_anomalies, 1);
        assert_eq!(report.affected_days, 1);
    }
}
