//! Stock Recommendation Core
//!
//! Reorder calculator over a demand forecast.

mod calculator;

pub use calculator::{recommend_stock, LeadTimeCalculator};
