use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))
        // Speech analysis
        .route("/api/analysis/speech", post(handlers::analyze_speech))
        .route("/api/analysis/history", get(handlers::analysis_history))
        // Browser frontend is served from another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
