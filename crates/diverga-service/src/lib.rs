//! HTTP service for Diverga search and the demo assistant.
//!
//! Routes:
//! - `GET /search`, `GET /api/search`: fuzzy catalog search
//! - `GET /api/agents`: agent listing for a locale
//! - `POST /api/diverga`: ask one research agent
//! - `GET /health`: liveness and catalog size

pub mod agents;
pub mod assistant;
pub mod error;
pub mod health;
pub mod search;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{build_router, run_server_with_shutdown};
pub use state::AppState;
