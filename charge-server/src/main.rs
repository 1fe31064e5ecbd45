use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use charge_server::planner::{PlannerConfig, StationRanker};
use charge_server::routes_api::{RoutesClient, RoutesConfig};
use charge_server::stations::StationCatalog;
use charge_server::web::{AppState, create_router};

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| {
        warn!("GOOGLE_MAPS_API_KEY not set; travel times will use distance estimates");
        String::new()
    });

    let mut routes_config = RoutesConfig::new(api_key);
    if let Ok(url) = std::env::var("ROUTES_BASE_URL") {
        routes_config = routes_config.with_base_url(url);
    }
    if let Ok(secs) = std::env::var("ROUTES_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => routes_config = routes_config.with_timeout(secs),
            Err(e) => warn!(value = %secs, error = %e, "ignoring invalid ROUTES_TIMEOUT_SECS"),
        }
    }
    let routes_client = RoutesClient::new(routes_config).expect("Failed to create Routes client");

    // Load the station catalog (fail fast if a configured file is unusable)
    let catalog = match std::env::var("STATION_CATALOG") {
        Ok(path) => StationCatalog::load(&path)
            .unwrap_or_else(|e| panic!("Failed to load station catalog from {path}: {e}")),
        Err(_) => StationCatalog::kochi(),
    };
    info!(stations = catalog.len(), "loaded station catalog");

    let ranker = StationRanker::new(Arc::new(catalog), routes_client, PlannerConfig::default());

    // Build app state and router
    let app = create_router(AppState::new(ranker));

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("Invalid BIND_ADDR");

    info!("EV charging planner listening on http://{addr}");
    info!("  GET  /api/status           - Status probe");
    info!("  POST /api/nearest-stations - Rank charging stations");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
