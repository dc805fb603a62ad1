//! HTTP client that loads the five reports concurrently

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{compose, DashboardInputs, DashboardView};
use crate::{
    error::{AppError, AppResult},
    models::{ActivityEvent, ApiResponse, ReturnCompliance, SummaryStats, TrendPoint, UpcomingReturn},
};

/// Caller identity and target, passed explicitly to the client
#[derive(Debug, Clone)]
pub struct Session {
    /// API root, e.g. `http://localhost:8080/api/v1`
    pub base_url: String,
    /// Forwarded as `Authorization: Bearer` when set
    pub bearer_token: Option<String>,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[derive(Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    session: Session,
    timeout: Duration,
}

impl DashboardClient {
    /// `timeout` bounds each report call separately
    pub fn new(session: Session, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            session,
            timeout,
        })
    }

    /// Fetch one report. Any failure is logged and yields `None`.
    async fn fetch<T: DeserializeOwned>(&self, report: &str) -> Option<T> {
        let url = format!("{}/dashboard/{}", self.session.base_url, report);
        let mut request = self.http.get(&url).timeout(self.timeout);
        if let Some(token) = &self.session.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(report, error = %e, "Dashboard report request failed");
                return None;
            }
        };

        // Failed reports still carry an envelope, so the body is decoded regardless of status
        let status = response.status();
        match response.json::<ApiResponse<T>>().await {
            Ok(envelope) if envelope.success => envelope.data,
            Ok(envelope) => {
                tracing::warn!(
                    report,
                    %status,
                    error = envelope.error.as_deref().unwrap_or_default(),
                    "Dashboard report unavailable"
                );
                None
            }
            Err(e) => {
                tracing::warn!(report, %status, error = %e, "Dashboard report body undecodable");
                None
            }
        }
    }

    /// Fire all five report calls at once and wait for every one of them
    pub async fn fetch_inputs(&self) -> DashboardInputs {
        let (stats, trend, compliance, upcoming, activities) = tokio::join!(
            self.fetch::<SummaryStats>("stats"),
            self.fetch::<Vec<TrendPoint>>("borrowing-trend"),
            self.fetch::<ReturnCompliance>("compliance"),
            self.fetch::<Vec<UpcomingReturn>>("upcoming-returns"),
            self.fetch::<Vec<ActivityEvent>>("recent-activities"),
        );

        DashboardInputs {
            stats,
            trend,
            compliance,
            upcoming,
            activities,
        }
    }

    pub async fn load(&self) -> DashboardView {
        compose(self.fetch_inputs().await)
    }
}
