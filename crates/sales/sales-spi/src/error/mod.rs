//! Error types for sales data.
//!
//! This module contains the error enum and the Result alias.

mod sales_error;

pub use sales_error::{Result, SalesError};
