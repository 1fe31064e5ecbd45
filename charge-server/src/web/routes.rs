//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::planner::{RankError, RankOutcome, RouteTimeProvider};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Every response allows any origin; preflight requests are answered by
/// the CORS layer.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: RouteTimeProvider + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/status", get(status))
        .route("/api/nearest-stations", post(nearest_stations::<P>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe.
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}

/// Rank charging stations for a trip.
async fn nearest_stations<P>(
    State(state): State<AppState<P>>,
    body: Bytes,
) -> Result<Response, AppError>
where
    P: RouteTimeProvider + 'static,
{
    // Parse JSON manually so we can log the body on failure
    let req: NearestStationsRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "JSON parse error");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = req
        .to_ranking_request()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    info!(
        current = %request.current_location,
        destination = %request.destination,
        battery = request.battery_percentage,
        full_charge = request.full_charge,
        "ranking stations"
    );

    match state.ranker.rank(&request).await? {
        RankOutcome::Ranked(candidates) => Ok(Json(candidates).into_response()),
        RankOutcome::Message(diagnostic) => Ok(Json(MessageResponse {
            message: diagnostic.message().to_string(),
        })
        .into_response()),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<RankError> for AppError {
    fn from(e: RankError) -> Self {
        AppError::Internal {
            message: format!("An error occurred: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
