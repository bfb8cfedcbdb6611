//! Anomaly Detection Service Provider Interface
//!
//! Defines the detector contract and the records it produces.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::AnomalyDetector;
pub use error::{AnomalyError, Result};
pub use model::{AnomalyDirection, AnomalyRecord, AnomalyReport};
