//! Repository layer for database operations
//!
//! [`ReportStore`] is the seam between the reporting service and storage. It
//! returns raw aggregates and rows; the meaning of the numbers is decided in
//! [`crate::reports`].

pub mod dashboard;
pub mod memory;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{ActionType, SummaryStats},
    reports::activity::ActivityEntry,
};

pub use memory::MemoryStore;

/// Raw stat-card counters; SQL aggregates may come back NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct SummaryCounts {
    pub total_equipments: Option<i64>,
    pub borrowed: Option<i64>,
    pub late_returns: Option<i64>,
    pub maintenance: Option<i64>,
}

impl SummaryCounts {
    pub fn into_stats(self) -> SummaryStats {
        SummaryStats {
            total_equipments: self.total_equipments.unwrap_or(0),
            borrowed: self.borrowed.unwrap_or(0),
            late_returns: self.late_returns.unwrap_or(0),
            maintenance: self.maintenance.unwrap_or(0),
        }
    }
}

/// Raw compliance counters. `SUM` over an empty table is NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct ComplianceCounts {
    pub on_time: Option<i64>,
    pub due_today: Option<i64>,
    pub overdue: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub total: Option<i64>,
}

/// Outstanding record joined with its stock item and borrower name
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UpcomingRow {
    pub equipment_code: String,
    pub equipment_name: String,
    pub borrower: Option<String>,
    pub due_date: NaiveDateTime,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Cheap connectivity probe for readiness checks
    async fn ping(&self) -> AppResult<()>;

    async fn summary_counts(
        &self,
        now: NaiveDateTime,
        fallback_days: i32,
        borrowed_status: &str,
        maintenance_keywords: &[String],
    ) -> AppResult<SummaryCounts>;

    /// Borrow counts grouped by calendar day of `date_out`, for `from..=to`
    async fn daily_borrow_counts(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<DailyCount>>;

    async fn compliance_counts(&self, today: NaiveDate, fallback_days: i32) -> AppResult<ComplianceCounts>;

    /// Outstanding records due on or after `today`, soonest first
    async fn upcoming_returns(
        &self,
        today: NaiveDate,
        fallback_days: i32,
        limit: i64,
    ) -> AppResult<Vec<UpcomingRow>>;

    /// One projection of the activity feed, newest first
    async fn activity_entries(&self, action: ActionType, limit: i64) -> AppResult<Vec<ActivityEntry>>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}
