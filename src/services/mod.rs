//! Services module
//!
//! Mocked stand-ins for the external data sources the estimates depend on.

pub mod pricing;

pub use pricing::{FuelNetwork, FuelPriceTable};
