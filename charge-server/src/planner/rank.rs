//! Station ranking.
//!
//! Filters the catalog to stations reachable on the current battery, costs
//! each as a charging stop between origin and destination, and returns the
//! quickest few.

use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, trace};

use crate::domain::{GeoPoint, Station, StationCandidate, round_to};
use crate::stations::StationCatalog;

use super::charging::{charge_needed_percent, charging_time_minutes};
use super::config::PlannerConfig;
use super::distance::distance_km;
use super::eta::{RouteTimeProvider, TravelTimeEstimator};

/// A ranking query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingRequest {
    pub current_location: GeoPoint,
    pub destination: GeoPoint,
    /// Expected to be within 0–100, but not enforced.
    pub battery_percentage: f64,
    /// Charge to 100% rather than just enough for the remaining leg.
    pub full_charge: bool,
}

impl RankingRequest {
    /// Create a request that asks for a full charge.
    pub fn new(current_location: GeoPoint, destination: GeoPoint, battery_percentage: f64) -> Self {
        Self {
            current_location,
            destination,
            battery_percentage,
            full_charge: true,
        }
    }

    pub fn with_full_charge(mut self, full_charge: bool) -> Self {
        self.full_charge = full_charge;
        self
    }
}

/// An expected outcome that yields no candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    BatteryFull,
    BatteryEmpty,
    NoStationInRange,
}

impl Diagnostic {
    /// User-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Diagnostic::BatteryFull => "Your battery is already full. You do not need to charge.",
            Diagnostic::BatteryEmpty => "Your battery is too low to reach any charging station.",
            Diagnostic::NoStationInRange => {
                "You cannot reach any charging station with the current battery level."
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a ranking that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    /// Candidates sorted by total trip time, quickest first.
    Ranked(Vec<StationCandidate>),
    /// No candidates, and why.
    Message(Diagnostic),
}

/// Unexpected failure while ranking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankError {
    /// Battery percentage is NaN
    #[error("battery percentage is not a number: {0}")]
    InvalidBattery(f64),

    /// An intermediate estimate was NaN or infinite
    #[error("non-finite {field} for station {station}")]
    NonFinite {
        station: String,
        field: &'static str,
    },
}

/// A station that passed the range filter.
struct Reachable<'a> {
    station: &'a Station,
    distance_to_station: f64,
    distance_to_destination: f64,
}

/// Ranks charging stations for a trip.
///
/// Holds the catalog and the travel-time source; stateless between calls,
/// so one ranker can serve any number of concurrent requests.
pub struct StationRanker<P> {
    catalog: Arc<StationCatalog>,
    estimator: TravelTimeEstimator<P>,
    config: PlannerConfig,
}

impl<P: RouteTimeProvider> StationRanker<P> {
    /// Create a new ranker.
    pub fn new(catalog: Arc<StationCatalog>, provider: P, config: PlannerConfig) -> Self {
        Self {
            catalog,
            estimator: TravelTimeEstimator::new(provider),
            config,
        }
    }

    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        self.estimator.provider()
    }

    /// Rank stations, returning at most `config.max_results` candidates.
    pub async fn rank(&self, request: &RankingRequest) -> Result<RankOutcome, RankError> {
        self.rank_top(request, self.config.max_results).await
    }

    /// Rank stations, returning at most `top_n` candidates.
    pub async fn rank_top(
        &self,
        request: &RankingRequest,
        top_n: usize,
    ) -> Result<RankOutcome, RankError> {
        let battery = request.battery_percentage;
        if battery.is_nan() {
            return Err(RankError::InvalidBattery(battery));
        }
        if battery >= 100.0 {
            return Ok(RankOutcome::Message(Diagnostic::BatteryFull));
        }
        if battery <= 0.0 {
            return Ok(RankOutcome::Message(Diagnostic::BatteryEmpty));
        }

        let max_range = self.config.max_range_km(battery);
        let reachable = self.reachable_stations(request, max_range);
        if reachable.is_empty() {
            debug!(max_range, "no station within range");
            return Ok(RankOutcome::Message(Diagnostic::NoStationInRange));
        }

        // Candidates are independent; each one's two legs are too.
        let costed = join_all(reachable.into_iter().map(|r| async move {
            let (to_station, to_destination) = tokio::join!(
                self.estimator
                    .eta_seconds(request.current_location, r.station.location()),
                self.estimator
                    .eta_seconds(r.station.location(), request.destination),
            );
            self.candidate(request, &r, to_station, to_destination)
        }))
        .await;

        let mut candidates = costed.into_iter().collect::<Result<Vec<_>, _>>()?;
        candidates.sort_by(|a, b| a.total_trip_time.total_cmp(&b.total_trip_time));
        candidates.truncate(top_n);

        debug!(
            returned = candidates.len(),
            best = candidates.first().map(|c| c.station_name.as_str()),
            "ranked stations"
        );

        Ok(RankOutcome::Ranked(candidates))
    }

    fn reachable_stations(&self, request: &RankingRequest, max_range: f64) -> Vec<Reachable<'_>> {
        self.catalog
            .stations()
            .iter()
            .filter_map(|station| {
                let distance_to_station = distance_km(request.current_location, station.location());
                let distance_to_destination = distance_km(station.location(), request.destination);

                if distance_to_station > max_range {
                    trace!(
                        station = station.name(),
                        distance_to_station, max_range, "station out of range"
                    );
                    return None;
                }

                Some(Reachable {
                    station,
                    distance_to_station,
                    distance_to_destination,
                })
            })
            .collect()
    }

    /// Cost one reachable station given its two leg ETAs in seconds.
    fn candidate(
        &self,
        request: &RankingRequest,
        reachable: &Reachable<'_>,
        origin_to_station_eta: f64,
        station_to_destination_eta: f64,
    ) -> Result<StationCandidate, RankError> {
        let station = reachable.station;
        let total_eta = origin_to_station_eta + station_to_destination_eta;
        let total_distance = reachable.distance_to_station + reachable.distance_to_destination;

        let charge_needed = charge_needed_percent(
            request.battery_percentage,
            request.full_charge,
            reachable.distance_to_destination,
            &self.config,
        );
        let charging_minutes =
            charging_time_minutes(charge_needed, station.charging_speed(), &self.config);

        let total_trip_time =
            total_eta / 60.0 + charging_minutes + self.config.station_overhead_mins;

        for (field, value) in [
            ("travel time", total_eta),
            ("charging time", charging_minutes),
            ("total trip time", total_trip_time),
        ] {
            if !value.is_finite() {
                return Err(RankError::NonFinite {
                    station: station.name().to_string(),
                    field,
                });
            }
        }

        debug!(
            station = station.name(),
            distance_to_station = reachable.distance_to_station,
            charge_needed,
            charging_minutes,
            total_trip_time,
            "costed station"
        );

        Ok(StationCandidate {
            station_name: station.name().to_string(),
            distance_to_station: round_to(reachable.distance_to_station, 2),
            distance_to_destination: round_to(reachable.distance_to_destination, 2),
            total_distance: round_to(total_distance, 2),
            charging_speed: station.charging_speed(),
            charging_time_minutes: round_to(charging_minutes, 1),
            travel_time_minutes: round_to(total_eta / 60.0, 1),
            total_trip_time: round_to(total_trip_time, 1),
            origin_to_station_eta: round_to(origin_to_station_eta / 60.0, 1),
            station_to_destination_eta: round_to(station_to_destination_eta / 60.0, 1),
        })
    }
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
