//! Trailing simple moving average.

/// Mean of each value and its `window - 1` predecessors.
///
/// The first `window - 1` positions have no full window and hold `NaN`. The
/// output always has the input's length; a zero window yields all `NaN`.
pub fn rolling_mean(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || data.len() < window {
        return vec![f64::NAN; data.len()];
    }

    // Each window is summed afresh so an all-zero window is exactly zero.
    let mut result = vec![f64::NAN; window - 1];
    result.extend(
        data.windows(window)
            .map(|w| w.iter().sum::<f64>() / window as f64),
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean() {
        let result = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!((result[2] - 2.0).abs() < 1e-10);
        assert!((result[3] - 3.0).abs() < 1e-10);
        assert!((result[4] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_mean_short_input() {
        let result = rolling_mean(&[1.0, 2.0], 7);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rolling_mean_absorbs_spike() {
        let mut data = vec![20.0; 10];
        data.push(40.0);
        data.extend([20.0; 3]);
        let result = rolling_mean(&data, 7);

        assert!((result[9] - 20.0).abs() < 1e-10);
        assert!((result[10] - 160.0 / 7.0).abs() < 1e-10);
        assert!((result[13] - 160.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_rolling_mean_zero_after_activity() {
        let data = [0.3, 0.1, 0.7, 0.0, 0.0, 0.0];
        let result = rolling_mean(&data, 3);
        assert_eq!(result[5], 0.0);
    }

    #[test]
    fn test_rolling_mean_empty() {
        assert!(rolling_mean(&[], 7).is_empty());
    }
}
