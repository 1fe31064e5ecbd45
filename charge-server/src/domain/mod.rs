//! Domain types for the charging-stop planner.
//!
//! Coordinates, stations and the ranked candidates handed back to callers.
//! Stations validate their invariants at construction time; coordinates do
//! not, because degenerate points must flow through to the distance
//! estimator, which degrades rather than failing.

mod candidate;
mod geo;
mod station;

pub use candidate::{StationCandidate, round_to};
pub use geo::{GeoPoint, InvalidGeoPoint};
pub use station::{InvalidStation, Station};
