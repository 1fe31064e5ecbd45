//! Charging-stop planner.
//!
//! Answers: "with this much battery left, which charging station gets me to
//! my destination soonest?"
//!
//! Every station within range is costed as a detour (origin → station →
//! destination), plus the time to charge there and a fixed stop overhead.
//! Travel times come from a [`RouteTimeProvider`], falling back to
//! distance-based estimates when the provider has nothing to offer.

mod charging;
mod config;
mod distance;
mod eta;
mod rank;

pub use charging::{charge_needed_percent, charging_time_minutes};
pub use config::PlannerConfig;
pub use distance::{GeodesicError, distance_km, geodesic_distance_km};
pub use eta::{
    RouteLookup, RouteTimeProvider, TravelTimeEstimator, flat_eta_seconds, heuristic_eta_seconds,
};
pub use rank::{Diagnostic, RankError, RankOutcome, RankingRequest, StationRanker};
