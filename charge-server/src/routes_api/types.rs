//! Wire types for the Routes API `computeRoutes` method.
//!
//! Only the request fields the planner sends and the response fields it
//! reads are modelled. Unknown response fields are ignored.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::GeoPoint;

use super::error::RoutesError;

/// Departure times are stamped this far ahead so the provider treats the
/// request as a forward-looking, traffic-aware query.
const DEPARTURE_LEAD_MINS: i64 = 2;

/// The `departureTime` for a request issued at `now`, as RFC 3339 UTC.
pub fn departure_time(now: DateTime<Utc>) -> String {
    (now + Duration::minutes(DEPARTURE_LEAD_MINS)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Request body for `directions/v2:computeRoutes`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: TravelMode,
    pub routing_preference: RoutingPreference,
    /// RFC 3339 timestamp, UTC.
    pub departure_time: String,
    pub compute_alternative_routes: bool,
}

impl ComputeRoutesRequest {
    /// A traffic-aware driving request with no alternatives.
    pub fn drive(origin: GeoPoint, destination: GeoPoint, departure_time: String) -> Self {
        Self {
            origin: Waypoint::from(origin),
            destination: Waypoint::from(destination),
            travel_mode: TravelMode::Drive,
            routing_preference: RoutingPreference::TrafficAware,
            departure_time,
            compute_alternative_routes: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub location: Location,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for Waypoint {
    fn from(point: GeoPoint) -> Self {
        Waypoint {
            location: Location {
                lat_lng: LatLng {
                    latitude: point.latitude,
                    longitude: point.longitude,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Drive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingPreference {
    TrafficAware,
}

/// Response body from `computeRoutes`, limited by the field mask.
///
/// Error responses also decode into this type, with no routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub distance_meters: Option<u64>,

    /// Duration such as `"845s"`.
    #[serde(default)]
    pub duration: Option<String>,
}

/// Parse a Routes API duration string (`"845s"`) into whole seconds.
pub fn parse_duration(text: &str) -> Result<u64, RoutesError> {
    text.trim()
        .trim_end_matches('s')
        .parse()
        .map_err(|_| RoutesError::InvalidDuration(text.to_string()))
}
