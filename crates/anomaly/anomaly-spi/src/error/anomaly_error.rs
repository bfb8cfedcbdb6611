//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// Only detector configuration can fail; detection itself never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnomalyError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
