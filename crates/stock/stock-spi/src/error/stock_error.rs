//! Stock recommendation error types.

use thiserror::Error;

/// Errors raised while validating stock inputs.
///
/// The calculator itself cannot fail once its inputs are validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StockError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for stock operations.
pub type Result<T> = std::result::Result<T, StockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let error = StockError::InvalidParameter {
            name: "lead_time_days".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: lead_time_days - must be at least 1"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StockError>();
    }
}
