//! Geodesic distance on the WGS-84 ellipsoid.
//!
//! Uses Vincenty's inverse formula. It is accurate to well under a metre
//! for the distances a charging stop involves, but does not converge for
//! nearly antipodal points; that case is reported as an error.
//!
//! [`distance_km`] turns that error into the degraded `0.0` result, so a
//! station nearly antipodal to the origin passes the range filter.

use tracing::warn;

use crate::domain::GeoPoint;

/// WGS-84 semi-major axis (m).
const WGS84_A: f64 = 6_378_137.0;

/// WGS-84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// WGS-84 semi-minor axis (m).
const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

const MAX_ITERATIONS: usize = 200;

/// Convergence threshold on lambda (radians).
const TOLERANCE: f64 = 1e-12;

/// Error from the geodesic computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeodesicError {
    /// A point is non-finite or outside latitude/longitude ranges
    #[error("invalid coordinate {0}")]
    InvalidCoordinate(GeoPoint),

    /// The iteration did not settle (nearly antipodal points)
    #[error("geodesic did not converge between {0} and {1}")]
    NoConvergence(GeoPoint, GeoPoint),
}

/// Geodesic distance between two points in km.
pub fn geodesic_distance_km(a: GeoPoint, b: GeoPoint) -> Result<f64, GeodesicError> {
    for point in [a, b] {
        if !point.is_valid() {
            return Err(GeodesicError::InvalidCoordinate(point));
        }
    }

    let l = (b.longitude - a.longitude).to_radians();
    let u1 = ((1.0 - WGS84_F) * a.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * b.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Coincident points
            return Ok(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Zero on the equator
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));

        let previous = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - previous).abs() < TOLERANCE {
            let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - WGS84_B.powi(2)) / WGS84_B.powi(2);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma.powi(2))
                                * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

            let metres = WGS84_B * big_a * (sigma - delta_sigma);
            return Ok(metres / 1000.0);
        }
    }

    Err(GeodesicError::NoConvergence(a, b))
}

/// Geodesic distance in km, or `0.0` if it cannot be computed.
///
/// Zero is a degraded result, not a measurement: range filtering will
/// treat such a pair as reachable. The failure is logged.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    match geodesic_distance_km(a, b) {
        Ok(km) => km,
        Err(e) => {
            warn!(error = %e, "distance calculation failed; using 0 km");
            0.0
        }
    }
}
