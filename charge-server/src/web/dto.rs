//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, InvalidGeoPoint};
use crate::planner::RankingRequest;

/// Request to rank charging stations for a trip.
///
/// Missing fields take defaults:
/// no locations, 0% battery, full charge.
#[derive(Debug, Deserialize)]
pub struct NearestStationsRequest {
    /// `[lat, lon]`
    #[serde(default)]
    pub current_location: Vec<f64>,

    /// `[lat, lon]`
    #[serde(default)]
    pub destination: Vec<f64>,

    #[serde(default)]
    pub battery_percentage: f64,

    #[serde(default = "default_full_charge")]
    pub full_charge: bool,
}

fn default_full_charge() -> bool {
    true
}

impl NearestStationsRequest {
    /// Convert to a planner request, checking the location shapes.
    pub fn to_ranking_request(&self) -> Result<RankingRequest, InvalidGeoPoint> {
        let current = GeoPoint::from_slice(&self.current_location)?;
        let destination = GeoPoint::from_slice(&self.destination)?;
        Ok(RankingRequest::new(current, destination, self.battery_percentage)
            .with_full_charge(self.full_charge))
    }
}

/// Response carrying a user-facing message instead of candidates.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Status probe response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
