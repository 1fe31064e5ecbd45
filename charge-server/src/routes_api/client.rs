//! Routes API HTTP client.
//!
//! Issues traffic-aware driving requests and reduces each answer to a
//! [`RouteLookup`]. Transport failures, timeouts and undecodable bodies are
//! returned as [`RoutesError`] so the caller can pick the right fallback.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::domain::GeoPoint;
use crate::planner::{RouteLookup, RouteTimeProvider};

use super::error::RoutesError;
use super::types::{ComputeRoutesRequest, ComputeRoutesResponse, departure_time, parse_duration};

/// Default base URL for the Routes API.
const DEFAULT_BASE_URL: &str = "https://routes.googleapis.com";

/// Only route distance and duration are requested.
const FIELD_MASK: &str = "routes.distanceMeters,routes.duration";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Configuration for the Routes client.
#[derive(Debug, Clone)]
pub struct RoutesConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Routes API client.
///
/// Uses a semaphore to limit concurrent requests; a ranking fans out two
/// lookups per reachable station.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl RoutesClient {
    /// Create a new Routes client with the given configuration.
    pub fn new(config: RoutesConfig) -> Result<Self, RoutesError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-goog-fieldmask", HeaderValue::from_static(FIELD_MASK));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/directions/v2:computeRoutes", self.base_url)
    }

    /// Compute a driving route and return its traffic-aware duration.
    pub async fn compute_route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteLookup, RoutesError> {
        for point in [origin, destination] {
            if !point.is_valid() {
                return Err(RoutesError::InvalidCoordinate(point.to_string()));
            }
        }

        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutesError::Unavailable("semaphore closed".to_string()))?;

        let departure = departure_time(Utc::now());
        let request = ComputeRoutesRequest::drive(origin, destination, departure);

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, %origin, %destination, "routes API response");

        let body = response.text().await?;
        let data: ComputeRoutesResponse =
            serde_json::from_str(&body).map_err(|e| RoutesError::Json {
                message: e.to_string(),
            })?;

        if !status.is_success() || data.routes.is_empty() {
            let snippet: String = body.chars().take(500).collect();
            warn!(%status, body = %snippet, "routes API request returned no route");
            return Ok(RouteLookup::NoRoute);
        }

        let duration = data.routes[0]
            .duration
            .as_deref()
            .ok_or_else(|| RoutesError::InvalidDuration(String::new()))?;

        Ok(RouteLookup::Duration(parse_duration(duration)?))
    }
}

impl RouteTimeProvider for RoutesClient {
    async fn route_duration(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<RouteLookup, RoutesError> {
        self.compute_route(origin, destination).await
    }
}
