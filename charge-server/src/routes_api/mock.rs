//! Mock route provider for testing without API access.
//!
//! Answers every lookup the same deterministic way, so rankings built on it
//! are reproducible.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::GeoPoint;
use crate::planner::{RouteLookup, RouteTimeProvider, geodesic_distance_km};

use super::error::RoutesError;

#[derive(Debug, Clone, Copy)]
enum Behaviour {
    /// Every route takes this many seconds.
    Fixed(u64),
    /// Straight-line distance driven at this speed (km/h).
    AtSpeed(f64),
    /// The provider answers, but without a route.
    NoRoute,
    /// The provider cannot be reached.
    Unavailable,
}

/// Deterministic stand-in for [`RoutesClient`](super::RoutesClient).
///
/// Clones share a call counter.
#[derive(Debug, Clone)]
pub struct MockRouteProvider {
    behaviour: Behaviour,
    calls: Arc<AtomicUsize>,
}

impl MockRouteProvider {
    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Every route takes `seconds`.
    pub fn fixed(seconds: u64) -> Self {
        Self::with_behaviour(Behaviour::Fixed(seconds))
    }

    /// Routes take the straight-line distance at `kmh`.
    pub fn at_speed(kmh: f64) -> Self {
        Self::with_behaviour(Behaviour::AtSpeed(kmh))
    }

    /// Every lookup is answered with no route.
    pub fn no_route() -> Self {
        Self::with_behaviour(Behaviour::NoRoute)
    }

    /// Every lookup fails as if the network were down.
    pub fn unavailable() -> Self {
        Self::with_behaviour(Behaviour::Unavailable)
    }

    /// Number of lookups made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RouteTimeProvider for MockRouteProvider {
    async fn route_duration(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteLookup, RoutesError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behaviour {
            Behaviour::Fixed(seconds) => Ok(RouteLookup::Duration(seconds)),
            Behaviour::AtSpeed(kmh) => {
                let km = geodesic_distance_km(origin, destination)
                    .map_err(|e| RoutesError::InvalidCoordinate(e.to_string()))?;
                Ok(RouteLookup::Duration((km / kmh * 3600.0).round() as u64))
            }
            Behaviour::NoRoute => Ok(RouteLookup::NoRoute),
            Behaviour::Unavailable => Err(RoutesError::Unavailable(
                "mock provider is offline".to_string(),
            )),
        }
    }
}
