//! Station catalog error types.

use crate::domain::InvalidStation;

/// Errors that can occur when building or loading a station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no stations
    #[error("station catalog is empty")]
    Empty,

    /// A station record failed validation
    #[error(transparent)]
    InvalidStation(#[from] InvalidStation),

    /// Two stations share a name
    #[error("duplicate station name: {0}")]
    DuplicateName(String),

    /// Failed to read the catalog file
    #[error("failed to read station catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the catalog file
    #[error("failed to parse station catalog: {message}")]
    Json { message: String },
}
