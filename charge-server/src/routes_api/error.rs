//! Routes API client error types.

/// Errors from a route-time lookup that fail before a usable answer exists.
///
/// An answered request with no route is not an error; see
/// [`RouteLookup::NoRoute`](crate::planner::RouteLookup::NoRoute).
#[derive(Debug, thiserror::Error)]
pub enum RoutesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Route duration was missing or not of the form `<integer>s`
    #[error("invalid route duration: {0:?}")]
    InvalidDuration(String),

    /// Origin or destination cannot be sent to the provider
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Provider unavailable (mock or shut-down client)
    #[error("route provider unavailable: {0}")]
    Unavailable(String),
}
