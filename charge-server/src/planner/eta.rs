//! Travel-time estimation.
//!
//! A live route provider is preferred. When it answers without a route the
//! estimate comes from the straight-line distance with a road-inefficiency
//! factor and speed tiering; when the call itself fails, from the plain
//! distance at a flat urban speed. The two fallbacks disagree for the same
//! pair of points; both are kept as they are.

use std::future::Future;

use tracing::{debug, warn};

use crate::domain::GeoPoint;
use crate::routes_api::RoutesError;

use super::distance::distance_km;

/// Road distance over straight-line distance.
pub const ROUTE_INEFFICIENCY: f64 = 1.2;

/// Below this straight-line distance a trip is assumed to be urban (km).
const URBAN_TRIP_KM: f64 = 15.0;

const URBAN_SPEED_KMH: f64 = 40.0;
const HIGHWAY_SPEED_KMH: f64 = 60.0;

/// Speed used when the provider could not be asked at all.
const FLAT_SPEED_KMH: f64 = 40.0;

/// What a route provider had to say about a pair of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLookup {
    /// Duration of the first route, in whole seconds.
    Duration(u64),
    /// The provider answered, but with no route or a failure status.
    NoRoute,
}

/// Source of live driving times.
///
/// This abstraction allows the planner to be tested without network access.
/// An `Err` means the provider could not be consulted (transport failure,
/// timeout, unreadable answer); an answer without a route is
/// `Ok(RouteLookup::NoRoute)`.
pub trait RouteTimeProvider: Send + Sync {
    fn route_duration(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> impl Future<Output = Result<RouteLookup, RoutesError>> + Send;
}

/// Distance/speed estimate used when the provider has no route (seconds).
pub fn heuristic_eta_seconds(distance_km: f64) -> f64 {
    let speed = if distance_km < URBAN_TRIP_KM {
        URBAN_SPEED_KMH
    } else {
        HIGHWAY_SPEED_KMH
    };
    (distance_km * ROUTE_INEFFICIENCY / speed) * 3600.0
}

/// Estimate used when the provider call failed outright (seconds).
pub fn flat_eta_seconds(distance_km: f64) -> f64 {
    (distance_km / FLAT_SPEED_KMH) * 3600.0
}

/// Travel-time estimator over a route provider.
///
/// Never fails: every provider problem degrades to an estimate.
#[derive(Debug, Clone)]
pub struct TravelTimeEstimator<P> {
    provider: P,
}

impl<P: RouteTimeProvider> TravelTimeEstimator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Estimated driving time from `origin` to `destination` in seconds.
    pub async fn eta_seconds(&self, origin: GeoPoint, destination: GeoPoint) -> f64 {
        match self.provider.route_duration(origin, destination).await {
            Ok(RouteLookup::Duration(seconds)) => seconds as f64,
            Ok(RouteLookup::NoRoute) => {
                let km = distance_km(origin, destination);
                debug!(%origin, %destination, km, "no route from provider; using heuristic");
                heuristic_eta_seconds(km)
            }
            Err(e) => {
                warn!(error = %e, %origin, %destination, "route provider failed; using flat-speed estimate");
                flat_eta_seconds(distance_km(origin, destination))
            }
        }
    }
}
