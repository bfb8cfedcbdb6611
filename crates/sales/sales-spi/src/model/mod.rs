//! Data models for sales history.

mod record;
mod series;

pub use record::{day_of_week, SalesRecord};
pub use series::SalesSeries;
