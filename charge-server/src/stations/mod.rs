//! Charging station catalog.
//!
//! The catalog is fixed reference data: built once at startup (either the
//! built-in deployment table or a JSON file named by `STATION_CATALOG`) and
//! shared read-only between requests.

mod catalog;
mod error;

pub use catalog::{StationCatalog, StationRecord};
pub use error::CatalogError;
