//! Ranked charging-stop candidates.

use serde::Serialize;

/// Round `value` to `places` decimal places.
///
/// ```
/// use charge_server::domain::round_to;
///
/// assert_eq!(round_to(12.345678, 2), 12.35);
/// assert_eq!(round_to(47.96, 1), 48.0);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// One station considered for a charging stop, with its time breakdown.
///
/// Distances are in km rounded to 2 decimals; times are in minutes rounded
/// to 1 decimal. Field names are the JSON wire names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationCandidate {
    pub station_name: String,
    pub distance_to_station: f64,
    pub distance_to_destination: f64,
    pub total_distance: f64,
    /// kW
    pub charging_speed: f64,
    pub charging_time_minutes: f64,
    /// Origin to station plus station to destination.
    pub travel_time_minutes: f64,
    /// Travel plus charging plus the fixed station overhead.
    pub total_trip_time: f64,
    pub origin_to_station_eta: f64,
    pub station_to_destination_eta: f64,
}
