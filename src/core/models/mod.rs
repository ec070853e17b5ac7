//! Request and response value objects
//!
//! Every entity here lives for a single request. Field names match the JSON
//! wire format.

mod fuel;
mod ifta;
mod route;
mod truck;
mod waypoint;

pub use fuel::{FuelStop, FuelSuggestRequest, FuelSuggestResponse};
pub use ifta::{IftaStateSummary, IftaSummaryRequest, IftaSummaryResponse, StateValues};
pub use route::{RouteLeg, RoutePlanRequest, RoutePlanResponse};
pub use truck::TruckSpec;
pub use waypoint::Waypoint;

/// Currency of every monetary estimate
pub const CURRENCY: &str = "USD";
