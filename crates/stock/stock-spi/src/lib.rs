//! Stock Recommendation Service Provider Interface
//!
//! Defines the validated stock inputs, the recommendation they produce, and
//! the calculator contract.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::StockCalculator;
pub use error::{Result, StockError};
pub use model::{StockParams, StockRecommendation, StockStatus, MAX_SAFETY_PCT};
