//! API handlers for the dashboard REST endpoints

pub mod dashboard;
pub mod health;
pub mod openapi;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Dashboard reports
        .route("/dashboard/stats", get(dashboard::get_stats))
        .route("/dashboard/borrowing-trend", get(dashboard::get_borrowing_trend))
        .route("/dashboard/compliance", get(dashboard::get_compliance))
        .route("/dashboard/upcoming-returns", get(dashboard::get_upcoming_returns))
        .route("/dashboard/recent-activities", get(dashboard::get_recent_activities))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
