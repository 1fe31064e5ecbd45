//! Unit tests for station ranking.

use super::*;
use crate::routes_api::MockRouteProvider;

fn fort() -> GeoPoint {
    GeoPoint::new(9.9658, 76.2421)
}

fn edapally() -> GeoPoint {
    GeoPoint::new(10.0261, 76.3125)
}

fn kochi_ranker(provider: MockRouteProvider) -> StationRanker<MockRouteProvider> {
    StationRanker::new(
        Arc::new(StationCatalog::kochi()),
        provider,
        PlannerConfig::default(),
    )
}

/// A catalog of `n` stations spaced ~1.1 km apart heading north from FORT.
fn line_catalog(n: usize) -> StationCatalog {
    let stations = (0..n)
        .map(|i| {
            let location = GeoPoint::new(9.9658 + 0.01 * i as f64, 76.2421);
            Station::new(format!("S{i}"), location, 50.0 + 10.0 * i as f64).unwrap()
        })
        .collect();
    StationCatalog::new(stations).unwrap()
}

fn ranked(outcome: RankOutcome) -> Vec<StationCandidate> {
    match outcome {
        RankOutcome::Ranked(candidates) => candidates,
        RankOutcome::Message(d) => panic!("expected candidates, got message: {d}"),
    }
}

fn names(candidates: &[StationCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.station_name.as_str()).collect()
}

#[tokio::test]
async fn full_battery_needs_no_charge() {
    let ranker = kochi_ranker(MockRouteProvider::fixed(60));

    for battery in [100.0, 100.5, 250.0, f64::INFINITY] {
        let request = RankingRequest::new(fort(), edapally(), battery);
        assert_eq!(
            ranker.rank(&request).await,
            Ok(RankOutcome::Message(Diagnostic::BatteryFull))
        );
    }
    assert_eq!(ranker.provider().call_count(), 0);
}

#[tokio::test]
async fn empty_battery_cannot_reach_anything() {
    let ranker = kochi_ranker(MockRouteProvider::fixed(60));

    for battery in [0.0, -0.0, -10.0, f64::NEG_INFINITY] {
        let request = RankingRequest::new(fort(), edapally(), battery);
        assert_eq!(
            ranker.rank(&request).await,
            Ok(RankOutcome::Message(Diagnostic::BatteryEmpty))
        );
    }
}

#[tokio::test]
async fn nan_battery_is_an_error() {
    let ranker = kochi_ranker(MockRouteProvider::fixed(60));
    let request = RankingRequest::new(fort(), edapally(), f64::NAN);

    let err = ranker.rank(&request).await.unwrap_err();
    assert!(matches!(err, RankError::InvalidBattery(_)));
    assert_eq!(err.to_string(), "battery percentage is not a number: NaN");
}

#[test]
fn diagnostic_messages() {
    assert_eq!(
        Diagnostic::BatteryFull.to_string(),
        "Your battery is already full. You do not need to charge."
    );
    assert_eq!(
        Diagnostic::BatteryEmpty.to_string(),
        "Your battery is too low to reach any charging station."
    );
    assert_eq!(
        Diagnostic::NoStationInRange.to_string(),
        "You cannot reach any charging station with the current battery level."
    );
}

#[tokio::test]
async fn no_station_in_range() {
    let ranker = kochi_ranker(MockRouteProvider::fixed(60));
    // Bengaluru is ~350 km from Kochi; 10% is 30 km of range.
    let bengaluru = GeoPoint::new(12.9716, 77.5946);
    let request = RankingRequest::new(bengaluru, edapally(), 10.0);

    assert_eq!(
        ranker.rank(&request).await,
        Ok(RankOutcome::Message(Diagnostic::NoStationInRange))
    );
    assert_eq!(ranker.provider().call_count(), 0);
}

#[tokio::test]
async fn range_filter_excludes_distant_stations() {
    let ranker = kochi_ranker(MockRouteProvider::at_speed(40.0));
    // 2% is 6 km; only FORT itself is that close.
    let request = RankingRequest::new(fort(), edapally(), 2.0);

    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert_eq!(names(&candidates), ["FORT"]);
    assert_eq!(candidates[0].distance_to_station, 0.0);
    // Two lookups for the single reachable station.
    assert_eq!(ranker.provider().call_count(), 2);
}

#[tokio::test]
async fn fort_to_edapally_scenario() {
    let ranker = kochi_ranker(MockRouteProvider::at_speed(40.0));
    let request = RankingRequest::new(fort(), edapally(), 50.0);

    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert_eq!(candidates.len(), 3);

    let fort_pos = candidates
        .iter()
        .position(|c| c.station_name == "FORT")
        .expect("FORT should be ranked");
    assert!(fort_pos <= 1, "FORT ranked at {fort_pos}");

    let fort = &candidates[fort_pos];
    assert_eq!(fort.distance_to_station, 0.0);
    assert_eq!(fort.origin_to_station_eta, 0.0);
    assert_eq!(fort.charging_speed, 100.0);
    // 50 points at 100 kW: 12 min fast + 36 min slow
    assert_eq!(fort.charging_time_minutes, 48.0);
    assert!((fort.distance_to_destination - 10.2).abs() < 0.01);

    // EDAPALLY charges at 150 kW and needs no second leg.
    assert_eq!(candidates[0].station_name, "EDAPALLY");
    assert_eq!(candidates[0].charging_time_minutes, 32.0);
    assert_eq!(candidates[0].station_to_destination_eta, 0.0);
}

#[tokio::test]
async fn provider_outage_still_ranks() {
    let ranker = kochi_ranker(MockRouteProvider::unavailable());
    let request = RankingRequest::new(fort(), edapally(), 50.0);

    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert_eq!(names(&candidates), ["EDAPALLY", "FORT", "KALMASSERY"]);

    // Flat 40 km/h without inflation: 10.2 km is about 15.3 minutes.
    let fort = &candidates[1];
    assert!((fort.travel_time_minutes - 15.3).abs() < 0.05);
    assert_eq!(ranker.provider().call_count(), 8);
}

#[tokio::test]
async fn no_route_uses_inflated_heuristic() {
    let ranker = kochi_ranker(MockRouteProvider::no_route());
    let request = RankingRequest::new(fort(), edapally(), 50.0);

    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert_eq!(names(&candidates), ["EDAPALLY", "FORT", "KALMASSERY"]);

    // 10.2 km * 1.2 at 40 km/h is about 18.4 minutes.
    let fort = &candidates[1];
    assert!((fort.travel_time_minutes - 18.4).abs() < 0.05);
}

#[tokio::test]
async fn partial_charge_covers_only_the_remaining_leg() {
    let ranker = kochi_ranker(MockRouteProvider::fixed(300));
    let request = RankingRequest::new(fort(), edapally(), 50.0).with_full_charge(false);

    let candidates = ranked(ranker.rank_top(&request, 4).await.unwrap());
    assert_eq!(candidates.len(), 4);
    let edapally_stop = candidates
        .iter()
        .find(|c| c.station_name == "EDAPALLY")
        .unwrap();
    // The station is the destination: nothing left to charge for.
    assert_eq!(edapally_stop.charging_time_minutes, 0.0);
    assert_eq!(edapally_stop.total_trip_time, 15.0);

    // FORT: 10.2 km * 1.2 / 300 km is ~4.1%, charged at full power.
    let fort_stop = candidates.iter().find(|c| c.station_name == "FORT").unwrap();
    assert!((fort_stop.charging_time_minutes - 2.4).abs() < 0.05);
}

#[tokio::test]
async fn results_are_capped_and_sorted() {
    let ranker = StationRanker::new(
        Arc::new(line_catalog(10)),
        MockRouteProvider::at_speed(50.0),
        PlannerConfig::default(),
    );
    let request = RankingRequest::new(fort(), edapally(), 60.0);

    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert_eq!(candidates.len(), 3);
    for pair in candidates.windows(2) {
        assert!(pair[0].total_trip_time <= pair[1].total_trip_time);
    }
    assert_eq!(ranker.provider().call_count(), 20);

    let one = ranked(ranker.rank_top(&request, 1).await.unwrap());
    assert_eq!(one.len(), 1);
    assert_eq!(one[0], candidates[0]);
}

#[tokio::test]
async fn ties_keep_catalog_order() {
    let same_place = GeoPoint::new(10.0, 76.3);
    let stations = ["B", "A", "C"]
        .into_iter()
        .map(|name| Station::new(name, same_place, 100.0).unwrap())
        .collect();
    let ranker = StationRanker::new(
        Arc::new(StationCatalog::new(stations).unwrap()),
        MockRouteProvider::fixed(120),
        PlannerConfig::default(),
    );

    let request = RankingRequest::new(fort(), edapally(), 40.0);
    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert_eq!(names(&candidates), ["B", "A", "C"]);
}

#[tokio::test]
async fn degenerate_coordinates_do_not_crash() {
    let ranker = kochi_ranker(MockRouteProvider::unavailable());
    let nowhere = GeoPoint::new(f64::NAN, f64::NAN);

    // Distances from an unusable point degrade to zero, so every station
    // looks reachable.
    let request = RankingRequest::new(nowhere, edapally(), 30.0);
    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert_eq!(candidates.len(), 3);
    for c in &candidates {
        assert_eq!(c.distance_to_station, 0.0);
        assert_eq!(c.origin_to_station_eta, 0.0);
    }

    let request = RankingRequest::new(nowhere, GeoPoint::new(200.0, 500.0), 30.0);
    let candidates = ranked(ranker.rank(&request).await.unwrap());
    assert!(candidates.iter().all(|c| c.total_distance == 0.0));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    /// Points within roughly 100 km of Kochi.
    fn point_near_kochi() -> impl Strategy<Value = GeoPoint> {
        (9.0f64..11.0, 75.5f64..77.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
    }

    fn provider() -> impl Strategy<Value = MockRouteProvider> {
        prop_oneof![
            (0u64..7200).prop_map(MockRouteProvider::fixed),
            (20.0f64..120.0).prop_map(MockRouteProvider::at_speed),
            Just(MockRouteProvider::no_route()),
            Just(MockRouteProvider::unavailable()),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn ranking_invariants(
            origin in point_near_kochi(),
            destination in point_near_kochi(),
            battery in 0.1f64..99.9,
            full_charge in any::<bool>(),
            provider in provider(),
        ) {
            let ranker = StationRanker::new(
                Arc::new(line_catalog(6)),
                provider,
                PlannerConfig::default(),
            );
            let request = RankingRequest::new(origin, destination, battery)
                .with_full_charge(full_charge);

            let outcome = runtime().block_on(ranker.rank(&request));
            let max_range = 300.0 * battery / 100.0;

            match outcome {
                Ok(RankOutcome::Ranked(candidates)) => {
                    prop_assert!(!candidates.is_empty());
                    prop_assert!(candidates.len() <= 3);

                    for c in &candidates {
                        // Rounded to 2 decimals, so allow half a hundredth.
                        prop_assert!(c.distance_to_station <= max_range + 0.005);

                        let recomputed = c.travel_time_minutes + c.charging_time_minutes + 5.0;
                        prop_assert!(
                            (c.total_trip_time - recomputed).abs() <= 0.1 + 1e-9,
                            "total {} vs recomputed {}",
                            c.total_trip_time,
                            recomputed
                        );
                    }

                    for pair in candidates.windows(2) {
                        prop_assert!(pair[0].total_trip_time <= pair[1].total_trip_time);
                    }
                }
                Ok(RankOutcome::Message(d)) => {
                    prop_assert_eq!(d, Diagnostic::NoStationInRange);
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
    }
}
