//! One-time model acquisition

use std::path::{Path, PathBuf};
use std::sync::Arc;

use forecast_api::ModelConfig;
use forecast_spi::Result;
use once_cell::sync::OnceCell;

use crate::linear::LinearDemandModel;

/// Lazily loads a model artifact once and hands out shared references.
///
/// A failed load leaves the slot empty, so the next call tries again.
#[derive(Debug)]
pub struct ModelSlot {
    path: PathBuf,
    model: OnceCell<Arc<LinearDemandModel>>,
}

impl ModelSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: OnceCell::new(),
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.path.clone())
    }

    /// Slot that is already filled.
    pub fn preloaded(model: LinearDemandModel) -> Self {
        Self {
            path: PathBuf::new(),
            model: OnceCell::with_value(Arc::new(model)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// The loaded model, reading the artifact on first use.
    pub fn get(&self) -> Result<Arc<LinearDemandModel>> {
        self.model
            .get_or_try_init(|| LinearDemandModel::load(&self.path).map(Arc::new))
            .map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_spi::ForecastError;

    #[test]
    fn test_loads_once_and_reuses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        LinearDemandModel::new(1.0, [0.5, 0.1, 0.2, 0.0])
            .save(&path)
            .unwrap();

        let slot = ModelSlot::new(&path);
        assert!(!slot.is_loaded());

        let first = slot.get().unwrap();
        assert!(slot.is_loaded());

        std::fs::remove_file(&path).unwrap();
        let second = slot.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_artifact_is_unavailable() {
        let slot = ModelSlot::new("/no/such/dir/model.json");
        assert!(matches!(slot.get(), Err(ForecastError::ModelUnavailable(_))));
        assert!(!slot.is_loaded());
    }

    #[test]
    fn test_preloaded() {
        let slot = ModelSlot::preloaded(LinearDemandModel::new(0.0, [1.0, 0.0, 0.0, 0.0]));
        assert!(slot.is_loaded());
        assert_eq!(slot.get().unwrap().lag_1, 1.0);
    }
}
