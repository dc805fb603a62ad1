//! Error types for the dashboard server

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    i18n::Locale,
    models::{ApiResponse, RequestTimer},
};

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Timeout { .. } | AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Logs the error and answers with a failure envelope.
/// The raw error text never reaches the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let locale = Locale::default();
        let message = match self.status() {
            StatusCode::SERVICE_UNAVAILABLE => locale.service_unavailable(),
            _ => locale.internal_failure(),
        };
        tracing::error!(error = %self, "Request failed");
        let body = ApiResponse::<()>::failure(message, &RequestTimer::start());
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
