//! Web layer for the charging-stop planner.
//!
//! Provides the HTTP endpoints: a status probe and the nearest-stations
//! ranking.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
