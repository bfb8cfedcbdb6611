//! Linear demand model and its JSON artifact
//!
//! Fits `sales = intercept + b1*lag_1 + b2*lag_7 + b3*rolling_7 + b4*day_of_week`
//! by ordinary least squares over the training frame.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use forecast_api::TrainingConfig;
use forecast_spi::{DemandModel, FeatureVector, ForecastError, Result};
use sales_spi::SalesSeries;
use serde::{Deserialize, Serialize};

use crate::engine::CONTEXT_WINDOW;
use crate::features::{training_rows, TrainingRow};

/// Intercept plus one coefficient per feature.
const N_PARAMS: usize = 5;

/// Fit statistics stored alongside the coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of training rows
    pub samples: usize,
    /// Coefficient of determination on the training rows
    pub r_squared: f64,
    /// Last date in the training history
    pub trained_through: Option<NaiveDate>,
}

/// Linear regression over the four lag features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearDemandModel {
    pub intercept: f64,
    pub lag_1: f64,
    pub lag_7: f64,
    pub rolling_7: f64,
    pub day_of_week: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<TrainingSummary>,
}

impl LinearDemandModel {
    /// Create a model from an intercept and coefficients ordered as `FEATURE_NAMES`.
    pub fn new(intercept: f64, coefficients: [f64; 4]) -> Self {
        let [lag_1, lag_7, rolling_7, day_of_week] = coefficients;
        Self {
            intercept,
            lag_1,
            lag_7,
            rolling_7,
            day_of_week,
            summary: None,
        }
    }

    /// Coefficients ordered as `FEATURE_NAMES`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.lag_1, self.lag_7, self.rolling_7, self.day_of_week]
    }

    /// Load a model artifact. Missing or corrupt files are `ModelUnavailable`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            ForecastError::ModelUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let model = Self::from_json(&text).map_err(|e| match e {
            ForecastError::ModelUnavailable(reason) => {
                ForecastError::ModelUnavailable(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })?;
        tracing::info!(path = %path.display(), "loaded demand model");
        Ok(model)
    }

    /// Parse a model artifact from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(text)
            .map_err(|e| ForecastError::ModelUnavailable(e.to_string()))?;

        let all_finite = std::iter::once(model.intercept)
            .chain(model.coefficients())
            .all(f64::is_finite);
        if !all_finite {
            return Err(ForecastError::ModelUnavailable(
                "non-finite coefficient".to_string(),
            ));
        }

        Ok(model)
    }

    /// Write the artifact as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ForecastError::TrainingFailure(format!("{}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ForecastError::TrainingFailure(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| ForecastError::TrainingFailure(format!("{}: {}", path.display(), e)))
    }

    fn evaluate(&self, features: &FeatureVector) -> f64 {
        self.intercept
            + self
                .coefficients()
                .iter()
                .zip(features.to_array())
                .map(|(b, x)| b * x)
                .sum::<f64>()
    }
}

impl DemandModel for LinearDemandModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        Ok(self.evaluate(features))
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Fit a [`LinearDemandModel`] to the full history.
pub fn train_linear_model(
    series: &SalesSeries,
    config: &TrainingConfig,
) -> Result<LinearDemandModel> {
    config.validate()?;

    let rows = training_rows(series);
    if rows.len() < N_PARAMS {
        return Err(ForecastError::InsufficientHistory {
            required: CONTEXT_WINDOW + N_PARAMS,
            actual: series.len(),
        });
    }

    let (xtx, xty) = normal_equations(&rows, config.ridge);
    let beta = solve(xtx, xty)?;

    let mut model = LinearDemandModel::new(beta[0], [beta[1], beta[2], beta[3], beta[4]]);
    let r_squared = r_squared(&model, &rows);
    model.summary = Some(TrainingSummary {
        samples: rows.len(),
        r_squared,
        trained_through: series.last().map(|r| r.date),
    });

    tracing::info!(samples = rows.len(), r_squared, "trained linear demand model");
    Ok(model)
}

fn design_row(features: &FeatureVector) -> [f64; N_PARAMS] {
    let [a, b, c, d] = features.to_array();
    [1.0, a, b, c, d]
}

fn normal_equations(
    rows: &[TrainingRow],
    ridge: f64,
) -> ([[f64; N_PARAMS]; N_PARAMS], [f64; N_PARAMS]) {
    let mut xtx = [[0.0; N_PARAMS]; N_PARAMS];
    let mut xty = [0.0; N_PARAMS];

    for row in rows {
        let x = design_row(&row.features);
        for i in 0..N_PARAMS {
            xty[i] += x[i] * row.target;
            for j in 0..N_PARAMS {
                xtx[i][j] += x[i] * x[j];
            }
        }
    }

    // Intercept stays unpenalised.
    for (i, row) in xtx.iter_mut().enumerate().skip(1) {
        row[i] += ridge;
    }

    (xtx, xty)
}

/// Gaussian elimination with partial pivoting.
fn solve(
    mut a: [[f64; N_PARAMS]; N_PARAMS],
    mut b: [f64; N_PARAMS],
) -> Result<[f64; N_PARAMS]> {
    let scale = a
        .iter()
        .enumerate()
        .map(|(i, row)| row[i].abs())
        .fold(0.0, f64::max)
        .max(1.0);
    let tolerance = scale * 1e-12;

    for col in 0..N_PARAMS {
        let pivot = (col..N_PARAMS)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);

        if a[pivot][col].abs() < tolerance {
            return Err(ForecastError::TrainingFailure(
                "features are collinear; the least-squares system is singular".to_string(),
            ));
        }

        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..N_PARAMS {
            let factor = a[row][col] / a[col][col];
            for k in col..N_PARAMS {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0; N_PARAMS];
    for row in (0..N_PARAMS).rev() {
        let tail: f64 = ((row + 1)..N_PARAMS).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }

    if x.iter().all(|v| v.is_finite()) {
        Ok(x)
    } else {
        Err(ForecastError::TrainingFailure(
            "least-squares solution is not finite".to_string(),
        ))
    }
}

fn r_squared(model: &LinearDemandModel, rows: &[TrainingRow]) -> f64 {
    let n = rows.len() as f64;
    let mean = rows.iter().map(|r| r.target).sum::<f64>() / n;
    let ss_tot: f64 = rows.iter().map(|r| (r.target - mean).powi(2)).sum();
    let ss_res: f64 = rows
        .iter()
        .map(|r| (r.target - model.evaluate(&r.features)).powi(2))
        .sum();

    if ss_tot > 1e-10 {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    }
}
