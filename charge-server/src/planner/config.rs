//! Planner configuration.

use super::eta::ROUTE_INEFFICIENCY;

/// Domain constants for station ranking.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Range of the vehicle on a full battery (km).
    pub full_range_km: f64,

    /// Percentage points charged at full station power before the
    /// charge rate tapers to half.
    pub fast_charge_window_percent: f64,

    /// Road distance over straight-line distance, used when estimating the
    /// charge needed for the remaining leg.
    pub route_inefficiency: f64,

    /// Fixed time spent at a station for arrival, plug-in and payment (minutes).
    pub station_overhead_mins: f64,

    /// Maximum number of candidates to return.
    pub max_results: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        full_range_km: f64,
        fast_charge_window_percent: f64,
        route_inefficiency: f64,
        station_overhead_mins: f64,
        max_results: usize,
    ) -> Self {
        Self {
            full_range_km,
            fast_charge_window_percent,
            route_inefficiency,
            station_overhead_mins,
            max_results,
        }
    }

    /// Distance reachable on the given battery percentage (km).
    pub fn max_range_km(&self, battery_percentage: f64) -> f64 {
        self.full_range_km * (battery_percentage / 100.0)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            full_range_km: 300.0,
            fast_charge_window_percent: 20.0,
            route_inefficiency: ROUTE_INEFFICIENCY,
            station_overhead_mins: 5.0,
            max_results: 3,
        }
    }
}
