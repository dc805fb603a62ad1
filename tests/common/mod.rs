#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tower::util::ServiceExt;

use equipment_dashboard_server::{
    api,
    config::{AppConfig, ReportingConfig},
    i18n::Locale,
    models::{ActionType, BorrowRecord, StockItem},
    reports::activity::ActivityEntry,
    repository::{ComplianceCounts, DailyCount, MemoryStore, ReportStore, SummaryCounts, UpcomingRow},
    services::Services,
    AppError, AppResult, AppState,
};

/// Thursday 2025-11-20, 10:00 server-local
pub fn fixed_now() -> NaiveDateTime {
    at(11, 20, 10)
}

pub fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn stock(code: &str, name: &str, enabled: bool, status: Option<&str>) -> StockItem {
    StockItem {
        equipment_code: code.to_string(),
        equipment_name: name.to_string(),
        enabled,
        status: status.map(String::from),
    }
}

fn record(
    seq: i32,
    code: &str,
    user_out: &str,
    date_out: NaiveDateTime,
    returned: Option<(&str, NaiveDateTime)>,
    num_date: Option<i32>,
) -> BorrowRecord {
    BorrowRecord {
        seq,
        code: code.to_string(),
        user_out: Some(user_out.to_string()),
        user_in: returned.map(|(user, _)| user.to_string()),
        date_out: Some(date_out),
        date_in: returned.map(|(_, date)| date),
        num_date,
    }
}

/// Inventory snapshot as of [`fixed_now`]:
/// - 5 enabled items, NB1 and PJ9 borrowed, NB2 in maintenance (NB4 is disabled)
/// - seq 1 overdue since 11-08, seq 2 due today 08:00, seq 3 due 11-23,
///   seq 6 on the 60-day fallback (due 2026-01-18)
/// - seq 4 returned on time, seq 5 returned late
pub fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .with_stock(stock("NB1", "Notebook 1", true, Some("borrowed")))
        .with_stock(stock("NB2", "Notebook 2", true, Some("Under maintenance")))
        .with_stock(stock("NB3", "Notebook 3", true, Some("available")))
        .with_stock(stock("NB4", "Notebook 4", false, Some("repair")))
        .with_stock(stock("PJ9", "Projector P9", true, Some("borrowed")))
        .with_stock(stock("TB1", "Tablet 1", true, None))
        .with_employee("E1", "Somsak")
        .with_employee("E2", "Wasana")
        .with_employee("E3", "Anchalee")
        .with_record(record(1, "NB1", "E1", at(11, 1, 9), None, Some(7)))
        .with_record(record(2, "PJ9", "E2", at(11, 13, 8), None, Some(7)))
        .with_record(record(3, "NB3", "E1", at(11, 18, 14), None, Some(5)))
        .with_record(record(4, "NB2", "E1", at(11, 10, 9), Some(("E3", at(11, 12, 16))), Some(3)))
        .with_record(record(5, "NB1", "E3", at(11, 14, 9), Some(("E2", at(11, 19, 11))), Some(2)))
        .with_record(record(6, "TB1", "E3", at(11, 19, 9), None, None))
}

pub fn reporting() -> ReportingConfig {
    ReportingConfig {
        locale: Locale::En,
        ..ReportingConfig::default()
    }
}

pub fn state(store: Arc<dyn ReportStore>, reporting: ReportingConfig) -> AppState {
    let config = AppConfig {
        reporting: reporting.clone(),
        ..AppConfig::default()
    };
    AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(store, reporting)),
        clock: Arc::new(fixed_now),
    }
}

pub fn app(store: impl ReportStore + 'static) -> Router {
    api::router(state(Arc::new(store), reporting()))
}

pub async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn db_down() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

/// Store whose every call fails
pub struct FailingStore;

#[async_trait]
impl ReportStore for FailingStore {
    async fn ping(&self) -> AppResult<()> {
        Err(db_down())
    }

    async fn summary_counts(&self, _: NaiveDateTime, _: i32, _: &str, _: &[String]) -> AppResult<SummaryCounts> {
        Err(db_down())
    }

    async fn daily_borrow_counts(&self, _: NaiveDate, _: NaiveDate) -> AppResult<Vec<DailyCount>> {
        Err(db_down())
    }

    async fn compliance_counts(&self, _: NaiveDate, _: i32) -> AppResult<ComplianceCounts> {
        Err(db_down())
    }

    async fn upcoming_returns(&self, _: NaiveDate, _: i32, _: i64) -> AppResult<Vec<UpcomingRow>> {
        Err(db_down())
    }

    async fn activity_entries(&self, _: ActionType, _: i64) -> AppResult<Vec<ActivityEntry>> {
        Err(db_down())
    }
}

/// Delegates to an inner store, failing compliance and delaying summary stats
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub summary_delay: Duration,
}

#[async_trait]
impl ReportStore for FlakyStore {
    async fn ping(&self) -> AppResult<()> {
        self.inner.ping().await
    }

    async fn summary_counts(
        &self,
        now: NaiveDateTime,
        fallback_days: i32,
        borrowed_status: &str,
        maintenance_keywords: &[String],
    ) -> AppResult<SummaryCounts> {
        tokio::time::sleep(self.summary_delay).await;
        self.inner
            .summary_counts(now, fallback_days, borrowed_status, maintenance_keywords)
            .await
    }

    async fn daily_borrow_counts(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<DailyCount>> {
        self.inner.daily_borrow_counts(from, to).await
    }

    async fn compliance_counts(&self, _: NaiveDate, _: i32) -> AppResult<ComplianceCounts> {
        Err(db_down())
    }

    async fn upcoming_returns(&self, today: NaiveDate, fallback_days: i32, limit: i64) -> AppResult<Vec<UpcomingRow>> {
        self.inner.upcoming_returns(today, fallback_days, limit).await
    }

    async fn activity_entries(&self, action: ActionType, limit: i64) -> AppResult<Vec<ActivityEntry>> {
        self.inner.activity_entries(action, limit).await
    }
}
