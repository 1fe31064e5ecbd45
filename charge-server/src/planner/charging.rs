//! Charging-time model.
//!
//! Two tiers approximate the tapering of a real fast-charge curve: the
//! first window of percentage points charges at full station power, the rest
//! at half power.

use super::config::PlannerConfig;

/// Percentage points of charge to add at the station.
///
/// A full charge tops up to 100%. Otherwise just enough for the remaining
/// leg, with road distance approximated by the straight line plus the
/// inefficiency margin.
pub fn charge_needed_percent(
    battery_percentage: f64,
    full_charge: bool,
    distance_to_destination_km: f64,
    config: &PlannerConfig,
) -> f64 {
    if full_charge {
        100.0 - battery_percentage
    } else {
        ((distance_to_destination_km * config.route_inefficiency) / config.full_range_km) * 100.0
    }
}

/// Minutes to add `charge_needed_percent` at a station of `charging_speed` kW.
pub fn charging_time_minutes(
    charge_needed_percent: f64,
    charging_speed: f64,
    config: &PlannerConfig,
) -> f64 {
    let window = config.fast_charge_window_percent;
    if charge_needed_percent > window {
        let fast = (window / charging_speed) * 60.0;
        let slow = ((charge_needed_percent - window) / (charging_speed / 2.0)) * 60.0;
        fast + slow
    } else {
        (charge_needed_percent / charging_speed) * 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_tier_below_window() {
        let config = PlannerConfig::default();
        assert!(close(charging_time_minutes(15.0, 100.0, &config), 9.0));
        assert!(close(charging_time_minutes(20.0, 100.0, &config), 12.0));
        assert_eq!(charging_time_minutes(0.0, 100.0, &config), 0.0);
    }

    #[test]
    fn two_tiers_above_window() {
        let config = PlannerConfig::default();
        // 12 minutes fast + 36 minutes slow
        assert!(close(charging_time_minutes(50.0, 100.0, &config), 48.0));
        // 8 fast + 24 slow
        assert!(close(charging_time_minutes(50.0, 150.0, &config), 32.0));
        // 16 fast + 48 slow
        assert!(close(charging_time_minutes(50.0, 75.0, &config), 64.0));
    }

    #[test]
    fn full_charge_tops_up() {
        let config = PlannerConfig::default();
        assert_eq!(charge_needed_percent(35.0, true, 999.0, &config), 65.0);
    }

    #[test]
    fn partial_charge_covers_remaining_leg() {
        let config = PlannerConfig::default();
        // 100 km with 20% margin is 120 km of a 300 km range
        assert!(close(charge_needed_percent(35.0, false, 100.0, &config), 40.0));
        assert_eq!(charge_needed_percent(35.0, false, 0.0, &config), 0.0);
    }
}
