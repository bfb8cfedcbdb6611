//! Contract module containing trait definitions for forecast operations

mod demand_model;

pub use demand_model::DemandModel;
