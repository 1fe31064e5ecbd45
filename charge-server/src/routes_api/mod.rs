//! Google Routes API client.
//!
//! Provides the live travel-time source for the planner, plus a
//! deterministic mock for tests and offline development.
//!
//! Key characteristics of the Routes API as used here:
//! - One `computeRoutes` POST per origin/destination pair
//! - Traffic-aware routing needs a departure time in the future, so requests
//!   are stamped a couple of minutes ahead
//! - A field mask limits the response to route distance and duration
//! - Durations come back as strings such as `"845s"`

mod client;
mod error;
mod mock;
mod types;

pub use client::{RoutesClient, RoutesConfig};
pub use error::RoutesError;
pub use mock::MockRouteProvider;
pub use types::{
    ComputeRoutesRequest, ComputeRoutesResponse, LatLng, Location, Route, RoutingPreference,
    TravelMode, Waypoint, parse_duration,
};
