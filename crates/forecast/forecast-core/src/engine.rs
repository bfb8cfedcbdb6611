//! Recursive multi-step demand forecast
//!
//! The rollout is a fold over `1..=horizon`. Each step turns the current
//! [`RolloutState`] into a [`FeatureVector`], asks the model for a value, and
//! advances the state with that value. Later steps therefore see earlier
//! predictions as their lags, and any failed step invalidates the whole
//! forecast.

use chrono::{Days, NaiveDate};
use forecast_api::{ForecastConfig, MAX_HORIZON};
use forecast_spi::{
    DemandModel, FeatureVector, ForecastError, ForecastPoint, ForecastResult, Result,
};
use sales_spi::{day_of_week, SalesSeries};
use serde::{Deserialize, Serialize};

/// Trailing history length carried into the forecast.
pub const CONTEXT_WINDOW: usize = 7;

/// Shortest history the engine accepts: seven lags plus the current day.
pub const MIN_HISTORY: usize = CONTEXT_WINDOW + 1;

/// Lag accumulator threaded through the rollout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RolloutState {
    pub lag_1: f64,
    pub lag_7: f64,
    pub rolling_7: f64,
}

impl RolloutState {
    /// Seed from the tail of the history.
    ///
    /// `lag_7` is the seventh record counted from the end, and `rolling_7` is
    /// the plain mean of the last seven values.
    pub fn seed(series: &SalesSeries) -> Result<Self> {
        let n = series.len();
        if n < MIN_HISTORY {
            return Err(ForecastError::InsufficientHistory {
                required: MIN_HISTORY,
                actual: n,
            });
        }

        let records = series.records();
        let window = &records[n - CONTEXT_WINDOW..];

        Ok(Self {
            lag_1: records[n - 1].sales,
            lag_7: records[n - CONTEXT_WINDOW].sales,
            rolling_7: window.iter().map(|r| r.sales).sum::<f64>() / CONTEXT_WINDOW as f64,
        })
    }

    /// Model input for `date`.
    pub fn features(&self, date: NaiveDate) -> FeatureVector {
        FeatureVector::new(self.lag_1, self.lag_7, self.rolling_7, day_of_week(date))
    }

    /// State after observing `prediction`.
    ///
    /// `rolling_7` is an exponential-style update, not a sliding window.
    pub fn advance(self, prediction: f64) -> Self {
        Self {
            lag_1: prediction,
            lag_7: self.lag_1,
            rolling_7: (self.rolling_7 * 6.0 + prediction) / 7.0,
        }
    }
}

/// Forecast engine with a validated configuration.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
        }
    }
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Run the rollout for `series` against `model`.
    pub fn forecast<M>(&self, series: &SalesSeries, model: &M) -> Result<ForecastResult>
    where
        M: DemandModel + ?Sized,
    {
        let seed = RolloutState::seed(series)?;
        let last_date = series
            .last()
            .map(|r| r.date)
            .ok_or(ForecastError::InsufficientHistory {
                required: MIN_HISTORY,
                actual: 0,
            })?;

        let horizon = self.config.horizon;
        let (_, points) = (1..=horizon).try_fold(
            (seed, Vec::with_capacity(horizon.min(MAX_HORIZON))),
            |(state, mut points), step| {
                let date = target_date(last_date, step)?;
                let features = state.features(date);
                let prediction = predict_step(model, &features, step)?;

                tracing::debug!(
                    step,
                    %date,
                    lag_1 = features.lag_1,
                    lag_7 = features.lag_7,
                    rolling_7 = features.rolling_7,
                    prediction,
                    "forecast step"
                );

                points.push(ForecastPoint::new(date, prediction));
                Ok::<_, ForecastError>((state.advance(prediction), points))
            },
        )?;

        tracing::info!(
            model = model.name(),
            history = series.len(),
            horizon,
            "forecast complete"
        );

        Ok(ForecastResult::new(
            points,
            series.tail(CONTEXT_WINDOW).to_vec(),
        ))
    }
}

/// Forecast with the default 14-day horizon.
pub fn forecast<M>(series: &SalesSeries, model: &M) -> Result<ForecastResult>
where
    M: DemandModel + ?Sized,
{
    ForecastEngine::default().forecast(series, model)
}

fn target_date(last_date: NaiveDate, step: usize) -> Result<NaiveDate> {
    last_date
        .checked_add_days(Days::new(step as u64))
        .ok_or_else(|| ForecastError::InvalidParameter {
            name: "horizon".to_string(),
            reason: format!("{} days past {} is out of calendar range", step, last_date),
        })
}

fn predict_step<M>(model: &M, features: &FeatureVector, step: usize) -> Result<f64>
where
    M: DemandModel + ?Sized,
{
    let prediction = model
        .predict(features)
        .map_err(|e| ForecastError::PredictionFailure {
            step,
            reason: e.to_string(),
        })?;

    if !prediction.is_finite() {
        return Err(ForecastError::PredictionFailure {
            step,
            reason: format!("non-finite prediction {}", prediction),
        });
    }

    Ok(prediction)
}
