//! The station catalog and its file format.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{GeoPoint, Station};

use super::error::CatalogError;

/// One row of a catalog file.
///
/// Catalog files are JSON arrays of these records, using the same column
/// names as the deployment's station table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// kW
    pub charging_speed: f64,
}

impl TryFrom<StationRecord> for Station {
    type Error = CatalogError;

    fn try_from(record: StationRecord) -> Result<Self, Self::Error> {
        let location = GeoPoint::new(record.latitude, record.longitude);
        Ok(Station::new(
            record.station_name,
            location,
            record.charging_speed,
        )?)
    }
}

/// Immutable list of charging stations.
///
/// Non-empty with unique station names. Order is preserved from the
/// source, which only matters for tie-breaking in ranking.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Build a catalog, checking that it is non-empty and names are unique.
    pub fn new(stations: Vec<Station>) -> Result<Self, CatalogError> {
        if stations.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.name()) {
                return Err(CatalogError::DuplicateName(station.name().to_string()));
            }
        }

        Ok(Self { stations })
    }

    /// Build a catalog from file records.
    pub fn from_records(records: Vec<StationRecord>) -> Result<Self, CatalogError> {
        let stations = records
            .into_iter()
            .map(Station::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stations)
    }

    /// Parse a catalog from a JSON array of [`StationRecord`]s.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<StationRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json {
                message: e.to_string(),
            })?;
        Self::from_records(records)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The deployment's built-in stations around Kochi.
    pub fn kochi() -> Self {
        let table = [
            ("FORT", 9.9658, 76.2421, 100.0),
            ("KALMASSERY", 10.0531, 76.3528, 100.0),
            ("VITYILLA", 9.9658, 76.3217, 75.0),
            ("EDAPALLY", 10.0261, 76.3125, 150.0),
        ];

        let stations = table
            .into_iter()
            .filter_map(|(name, lat, lon, kw)| Station::new(name, GeoPoint::new(lat, lon), kw).ok())
            .collect();

        Self { stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::kochi()
    }
}
