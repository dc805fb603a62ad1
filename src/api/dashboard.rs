//! Dashboard report endpoints
//!
//! Every handler answers with the [`ApiResponse`] envelope. A failed report
//! is logged here and replaced by the report's localized message with
//! HTTP 500.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    error::AppResult,
    i18n::Report,
    models::{
        envelope::{
            BorrowingTrendResponse, RecentActivitiesResponse, ReturnComplianceResponse,
            SummaryStatsResponse, UpcomingReturnsResponse,
        },
        ApiResponse, RequestTimer,
    },
    AppState,
};

fn respond<T: Serialize>(
    state: &AppState,
    report: Report,
    result: AppResult<T>,
    timer: &RequestTimer,
) -> Response {
    match result {
        Ok(data) => ApiResponse::success(data, timer).into_response(),
        Err(e) => {
            tracing::error!(report = report.name(), error = %e, "Dashboard report failed");
            let message = state.services.dashboard.locale().report_failure(report);
            ApiResponse::<T>::failure(message, timer).into_response()
        }
    }
}

/// Stat-card counters
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Summary statistics", body = SummaryStatsResponse),
        (status = 500, description = "Report failed", body = SummaryStatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> Response {
    let timer = RequestTimer::start();
    let result = state.services.dashboard.summary_stats(state.now()).await;
    respond(&state, Report::SummaryStats, result, &timer)
}

/// Per-day borrow counts over the trailing window
#[utoipa::path(
    get,
    path = "/dashboard/borrowing-trend",
    tag = "dashboard",
    responses(
        (status = 200, description = "One point per day, oldest first", body = BorrowingTrendResponse),
        (status = 500, description = "Report failed", body = BorrowingTrendResponse)
    )
)]
pub async fn get_borrowing_trend(State(state): State<AppState>) -> Response {
    let timer = RequestTimer::start();
    let result = state.services.dashboard.borrowing_trend(state.now().date()).await;
    respond(&state, Report::BorrowingTrend, result, &timer)
}

/// On-time / due-today / overdue breakdown
#[utoipa::path(
    get,
    path = "/dashboard/compliance",
    tag = "dashboard",
    responses(
        (status = 200, description = "Return compliance", body = ReturnComplianceResponse),
        (status = 500, description = "Report failed", body = ReturnComplianceResponse)
    )
)]
pub async fn get_compliance(State(state): State<AppState>) -> Response {
    let timer = RequestTimer::start();
    let result = state.services.dashboard.return_compliance(state.now().date()).await;
    respond(&state, Report::ReturnCompliance, result, &timer)
}

/// Outstanding items due today or later
#[utoipa::path(
    get,
    path = "/dashboard/upcoming-returns",
    tag = "dashboard",
    responses(
        (status = 200, description = "Soonest due first", body = UpcomingReturnsResponse),
        (status = 500, description = "Report failed", body = UpcomingReturnsResponse)
    )
)]
pub async fn get_upcoming_returns(State(state): State<AppState>) -> Response {
    let timer = RequestTimer::start();
    let result = state.services.dashboard.upcoming_returns(state.now().date()).await;
    respond(&state, Report::UpcomingReturns, result, &timer)
}

/// Latest borrow and return events
#[utoipa::path(
    get,
    path = "/dashboard/recent-activities",
    tag = "dashboard",
    responses(
        (status = 200, description = "Newest first", body = RecentActivitiesResponse),
        (status = 500, description = "Report failed", body = RecentActivitiesResponse)
    )
)]
pub async fn get_recent_activities(State(state): State<AppState>) -> Response {
    let timer = RequestTimer::start();
    let result = state.services.dashboard.recent_activities().await;
    respond(&state, Report::RecentActivities, result, &timer)
}
