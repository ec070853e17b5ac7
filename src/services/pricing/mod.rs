//! Mock fuel pricing
//!
//! Per-gallon prices for the supported fuel networks. There is no live feed;
//! the table is built from constants and may be overridden by configuration.

mod table;
mod types;


// Re-export public types
pub use table::{DEFAULT_FUEL_PRICE, FuelPriceTable};
pub use types::{FuelNetwork, ParseFuelNetworkError};
