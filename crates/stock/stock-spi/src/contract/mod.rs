//! Contract definitions for stock recommendation.

mod stock_calculator;

pub use stock_calculator::StockCalculator;
