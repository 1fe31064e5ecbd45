//! Charging station reference data.

use super::GeoPoint;

/// Error returned when a station record violates its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidStation {
    #[error("station name must not be empty")]
    EmptyName,

    #[error("station {name}: charging speed must be a positive number of kW, got {speed}")]
    ChargingSpeed { name: String, speed: f64 },
}

/// A charging station.
///
/// `charging_speed` is always finite and strictly positive, so the
/// charging-time model can divide by it without checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    location: GeoPoint,
    charging_speed: f64,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        location: GeoPoint,
        charging_speed: f64,
    ) -> Result<Self, InvalidStation> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidStation::EmptyName);
        }
        if !charging_speed.is_finite() || charging_speed <= 0.0 {
            return Err(InvalidStation::ChargingSpeed {
                name,
                speed: charging_speed,
            });
        }
        Ok(Self {
            name,
            location,
            charging_speed,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Charging power in kW.
    pub fn charging_speed(&self) -> f64 {
        self.charging_speed
    }
}
