//! Great-circle geometry and rounding helpers

/// Mean Earth radius in statute miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in miles between two coordinates given in degrees
///
/// Uses the haversine formula on a spherical Earth.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // h can creep past 1.0 for antipodal points
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// Round to a fixed number of decimal places, ties to even
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
