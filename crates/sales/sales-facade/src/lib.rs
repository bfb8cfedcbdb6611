//! Sales Data Facade
//!
//! Unified re-exports for the sales data module.
//!
//! This facade provides a single entry point for all sales data functionality:
//! - `sales_spi` - Records, the validated series, errors, the source trait
//! - `sales_api` - Load configuration and builder
//! - `sales_core` - CSV and JSON sources
//!
//! # Example
//!
//! ```rust,ignore
//! use sales_facade::{load_sales, LoadConfig};
//!
//! let series = load_sales("data/sales.csv".as_ref(), LoadConfig::default()).unwrap();
//! println!("Got {} days of history", series.len());
//! ```

// Re-export everything from SPI
pub use sales_spi::*;

// Re-export everything from API
pub use sales_api::*;

// Re-export everything from Core
pub use sales_core::*;
