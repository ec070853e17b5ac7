//! Type definitions for fuel pricing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Truck-stop fuel retailer accepted at the API boundary
///
/// Serialized with the retailer's own spelling (`"TA"`, `"Pilot"`, ...).
/// Any other value fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelNetwork {
    /// TravelCenters of America
    #[serde(rename = "TA")]
    Ta,
    /// Pilot Flying J
    Pilot,
    /// Love's Travel Stops
    Loves,
    /// Petro Stopping Centers
    Petro,
}

impl FuelNetwork {
    /// All supported networks, in declaration order
    pub const ALL: [FuelNetwork; 4] = [
        FuelNetwork::Ta,
        FuelNetwork::Pilot,
        FuelNetwork::Loves,
        FuelNetwork::Petro,
    ];

    /// Network code as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelNetwork::Ta => "TA",
            FuelNetwork::Pilot => "Pilot",
            FuelNetwork::Loves => "Loves",
            FuelNetwork::Petro => "Petro",
        }
    }
}

impl fmt::Display for FuelNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known network code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel network '{0}', expected one of TA, Pilot, Loves, Petro")]
pub struct ParseFuelNetworkError(pub String);

impl FromStr for FuelNetwork {
    type Err = ParseFuelNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelNetwork::ALL
            .into_iter()
            .find(|network| network.as_str() == s.trim())
            .ok_or_else(|| ParseFuelNetworkError(s.to_string()))
    }
}
