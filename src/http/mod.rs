//! HTTP API server for the speech-coaching frontend
//!
//! This module provides the REST boundary around the analyzer:
//! - POST /api/analysis/speech - Score a transcript
//! - GET /api/analysis/history - Recent analyses, newest first
//! - GET /api/health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::parse_duration_field;
pub use routes::create_router;
pub use state::AppState;
