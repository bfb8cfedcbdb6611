//! Closure-backed demand model

use forecast_spi::{DemandModel, FeatureVector, Result};

/// Wraps a closure as a [`DemandModel`].
///
/// Handy for stubs and for adapting models that live behind another API.
pub struct FnModel<F> {
    name: String,
    predict: F,
}

impl<F> FnModel<F>
where
    F: Fn(&FeatureVector) -> Result<f64> + Send + Sync,
{
    pub fn new(name: &str, predict: F) -> Self {
        Self {
            name: name.to_string(),
            predict,
        }
    }
}

impl<F> DemandModel for FnModel<F>
where
    F: Fn(&FeatureVector) -> Result<f64> + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (self.predict)(features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnModel<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnModel").field("name", &self.name).finish()
    }
}
