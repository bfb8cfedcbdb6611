//! Error types for stock recommendation.

mod stock_error;

pub use stock_error::{Result, StockError};
