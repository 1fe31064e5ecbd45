//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::StationRanker;

/// Shared application state.
///
/// Generic over the route provider so the router can be exercised with
/// the mock provider.
pub struct AppState<P> {
    /// Station ranker over the catalog and route provider
    pub ranker: Arc<StationRanker<P>>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(ranker: StationRanker<P>) -> Self {
        Self {
            ranker: Arc::new(ranker),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            ranker: Arc::clone(&self.ranker),
        }
    }
}
