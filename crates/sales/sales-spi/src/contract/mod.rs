//! Contract definitions for sales data.
//!
//! This module contains trait definitions that sources must implement.

mod sales_source;

pub use sales_source::SalesSource;
