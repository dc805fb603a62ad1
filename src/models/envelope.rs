//! Uniform response envelope shared by every reporting endpoint

use std::time::Instant;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::dashboard::{ActivityEvent, ReturnCompliance, SummaryStats, TrendPoint, UpcomingReturn};

/// Marks the start of a request so `duration` covers the whole handler.
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer(Instant);

impl RequestTimer {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.0.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// `data` is present only on success, `error` only on failure.
/// `duration` (ms) and `timestamp` are always set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(
    SummaryStatsResponse = ApiResponse<SummaryStats>,
    BorrowingTrendResponse = ApiResponse<Vec<TrendPoint>>,
    ReturnComplianceResponse = ApiResponse<ReturnCompliance>,
    UpcomingReturnsResponse = ApiResponse<Vec<UpcomingReturn>>,
    RecentActivitiesResponse = ApiResponse<Vec<ActivityEvent>>
)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Milliseconds elapsed since the request started
    pub duration: u64,
    #[schema(value_type = String, example = "2025-11-20T07:15:02.114Z")]
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, timer: &RequestTimer) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            duration: timer.elapsed_ms(),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>, timer: &RequestTimer) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            duration: timer.elapsed_ms(),
            timestamp: Utc::now(),
        }
    }

    /// Payload of a successful envelope
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self)).into_response()
    }
}
