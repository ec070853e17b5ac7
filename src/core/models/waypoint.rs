use crate::core::geo::haversine_miles;
use serde::{Deserialize, Serialize};

/// A geographic point on a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, [-180, 180]
    pub lon: f64,
    /// Optional display label
    #[serde(default)]
    pub label: Option<String>,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Great-circle distance to another waypoint in miles
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        haversine_miles(self.lat, self.lon, other.lat, other.lon)
    }

    /// Label to show for this point, falling back to `WP<index>`
    pub fn display_label(&self, index: usize) -> String {
        match &self.label {
            Some(label) if !label.is_empty() => label.clone(),
            _ => format!("WP{}", index),
        }
    }
}
