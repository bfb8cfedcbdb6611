//! Anomaly Detection Core
//!
//! Rolling-average deviation detector over a daily sales history.

mod detectors;
mod rolling;

pub use detectors::*;
pub use rolling::rolling_mean;
