//! Model input for a single prediction step

use serde::{Deserialize, Serialize};

/// Feature names in the order of [`FeatureVector::to_array`].
pub const FEATURE_NAMES: [&str; 4] = ["lag_1", "lag_7", "rolling_7", "day_of_week"];

/// Inputs for one demand prediction.
///
/// Built fresh for every step and dropped once the model has answered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Most recent known (or predicted) sales
    pub lag_1: f64,
    /// Sales seven periods back
    pub lag_7: f64,
    /// Running 7-period level
    pub rolling_7: f64,
    /// Target date's weekday, Monday = 0
    pub day_of_week: u8,
}

impl FeatureVector {
    pub fn new(lag_1: f64, lag_7: f64, rolling_7: f64, day_of_week: u8) -> Self {
        Self {
            lag_1,
            lag_7,
            rolling_7,
            day_of_week,
        }
    }

    /// Features as a numeric row, ordered as [`FEATURE_NAMES`].
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.lag_1,
            self.lag_7,
            self.rolling_7,
            f64::from(self.day_of_week),
        ]
    }
}
