//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{dashboard, health};
use crate::models::{dashboard as reports, envelope};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Dashboard API",
        version = "1.0.0",
        description = "Read-only reporting endpoints for the equipment borrow/return dashboard"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Dashboard
        dashboard::get_stats,
        dashboard::get_borrowing_trend,
        dashboard::get_compliance,
        dashboard::get_upcoming_returns,
        dashboard::get_recent_activities,
    ),
    components(
        schemas(
            health::HealthResponse,
            reports::SummaryStats,
            reports::TrendPoint,
            reports::ComplianceBucket,
            reports::ReturnCompliance,
            reports::UpcomingReturn,
            reports::ActionType,
            reports::ActivityEvent,
            envelope::SummaryStatsResponse,
            envelope::BorrowingTrendResponse,
            envelope::ReturnComplianceResponse,
            envelope::UpcomingReturnsResponse,
            envelope::RecentActivitiesResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Dashboard reports")
    )
)]
pub struct ApiDoc;

/// Create router with Swagger UI
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
