//! Sales Data Service Provider Interface
//!
//! Defines the sales history contract shared by the forecast, anomaly and
//! stock modules.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SalesSource;
pub use error::{Result, SalesError};
pub use model::{day_of_week, SalesRecord, SalesSeries};
