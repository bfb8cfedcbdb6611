//! Demand model trait for the forecast rollout

use std::sync::Arc;

use crate::error::Result;
use crate::model::FeatureVector;

/// A pre-trained regression model.
///
/// The engine only ever asks for one number per step, so stubs, ensembles and
/// remote inference clients can all stand in for the trained model.
pub trait DemandModel: Send + Sync {
    /// Predict demand for the date described by `features`.
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Model name for log lines
    fn name(&self) -> &str {
        "model"
    }
}

impl<M: DemandModel + ?Sized> DemandModel for &M {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: DemandModel + ?Sized> DemandModel for Box<M> {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: DemandModel + ?Sized> DemandModel for Arc<M> {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
