//! Geographic coordinates.

use std::fmt;

/// Error returned when a coordinate pair has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location: expected [latitude, longitude], got {len} values")]
pub struct InvalidGeoPoint {
    len: usize,
}

/// A (latitude, longitude) pair in decimal degrees.
///
/// No range checking happens here. A point such as `(NaN, 0.0)` or
/// `(95.0, 0.0)` is representable; consumers decide how to degrade.
///
/// # Examples
///
/// ```
/// use charge_server::domain::GeoPoint;
///
/// let fort = GeoPoint::new(9.9658, 76.2421);
/// assert!(fort.is_valid());
///
/// assert!(!GeoPoint::new(91.0, 0.0).is_valid());
/// assert!(GeoPoint::from_slice(&[1.0]).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from a `[lat, lon]` slice.
    pub fn from_slice(values: &[f64]) -> Result<Self, InvalidGeoPoint> {
        match values {
            [lat, lon] => Ok(Self::new(*lat, *lon)),
            _ => Err(InvalidGeoPoint { len: values.len() }),
        }
    }

    /// Whether both components are finite and within the usual ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
