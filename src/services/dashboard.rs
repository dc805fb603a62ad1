//! Dashboard reporting service
//!
//! Each operation awaits one store call (activities awaits its two
//! projections together), bounded by the configured query timeout, and
//! shapes the rows with the rules in [`crate::reports`].

use std::{future::Future, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    config::ReportingConfig,
    error::{AppError, AppResult},
    i18n::{Locale, Report},
    models::{ActionType, ActivityEvent, ReturnCompliance, SummaryStats, TrendPoint, UpcomingReturn},
    reports::{activity, compliance, due, trend},
    repository::ReportStore,
};

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn ReportStore>,
    config: ReportingConfig,
}

impl DashboardService {
    pub fn new(store: Arc<dyn ReportStore>, config: ReportingConfig) -> Self {
        Self { store, config }
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Run a store call under the query timeout
    async fn bounded<T>(&self, report: &'static str, call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        let after = self.config.query_timeout();
        match tokio::time::timeout(after, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout { operation: report, after }),
        }
    }

    /// Connectivity check used by the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        self.bounded("ping", self.store.ping()).await
    }

    /// Stat-card counters as of `now`
    pub async fn summary_stats(&self, now: NaiveDateTime) -> AppResult<SummaryStats> {
        let counts = self
            .bounded(
                Report::SummaryStats.name(),
                self.store.summary_counts(
                    now,
                    self.config.due_date_fallback_days,
                    &self.config.borrowed_status,
                    &self.config.maintenance_keywords,
                ),
            )
            .await?;
        Ok(counts.into_stats())
    }

    /// Borrow counts for each day of the trailing window ending `today`
    pub async fn borrowing_trend(&self, today: NaiveDate) -> AppResult<Vec<TrendPoint>> {
        let days = trend::window(today, self.config.trend_window_days);
        let (from, to) = match (days.first(), days.last()) {
            (Some(from), Some(to)) => (*from, *to),
            _ => return Ok(Vec::new()),
        };

        let rows = self
            .bounded(
                Report::BorrowingTrend.name(),
                self.store.daily_borrow_counts(from, to),
            )
            .await?;
        tracing::debug!(days = days.len(), observed = rows.len(), "Borrowing trend loaded");

        Ok(trend::fill(
            &days,
            rows.into_iter().map(|r| (r.day, r.total.unwrap_or(0))),
            self.config.locale,
        ))
    }

    pub async fn return_compliance(&self, today: NaiveDate) -> AppResult<ReturnCompliance> {
        let counts = self
            .bounded(
                Report::ReturnCompliance.name(),
                self.store
                    .compliance_counts(today, self.config.due_date_fallback_days),
            )
            .await?;

        Ok(compliance::from_counts(
            counts.on_time.unwrap_or(0),
            counts.due_today.unwrap_or(0),
            counts.overdue.unwrap_or(0),
        ))
    }

    /// Outstanding records due today or later, soonest first
    pub async fn upcoming_returns(&self, today: NaiveDate) -> AppResult<Vec<UpcomingReturn>> {
        let rows = self
            .bounded(
                Report::UpcomingReturns.name(),
                self.store.upcoming_returns(
                    today,
                    self.config.due_date_fallback_days,
                    self.config.upcoming_limit,
                ),
            )
            .await?;
        tracing::debug!(rows = rows.len(), "Upcoming returns loaded");

        let locale = self.config.locale;
        Ok(rows
            .into_iter()
            .map(|row| {
                let remaining_days = due::remaining_days(row.due_date, today);
                UpcomingReturn {
                    code: row.equipment_code,
                    asset: row.equipment_name,
                    borrower: row.borrower.unwrap_or_else(|| "-".to_string()),
                    due_date: row.due_date,
                    remaining_days,
                    status_text: locale.due_status(remaining_days),
                }
            })
            .collect())
    }

    /// Newest borrow and return events
    pub async fn recent_activities(&self) -> AppResult<Vec<ActivityEvent>> {
        let limit = self.config.recent_activity_limit;
        let (borrows, returns) = self
            .bounded(Report::RecentActivities.name(), async {
                tokio::try_join!(
                    self.store.activity_entries(ActionType::Borrow, limit),
                    self.store.activity_entries(ActionType::Return, limit),
                )
            })
            .await?;
        tracing::debug!(borrows = borrows.len(), returns = returns.len(), "Activity projections loaded");

        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(activity::merge(borrows, returns, limit, self.config.locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reports::activity::ActivityEntry,
        repository::{ComplianceCounts, DailyCount, MockReportStore, SummaryCounts, UpcomingRow},
    };

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, 0, 0).unwrap()
    }

    fn service(store: MockReportStore) -> DashboardService {
        let config = ReportingConfig {
            locale: Locale::En,
            ..ReportingConfig::default()
        };
        DashboardService::new(Arc::new(store), config)
    }

    #[tokio::test]
    async fn test_summary_passes_configured_constants() {
        let mut store = MockReportStore::new();
        store
            .expect_summary_counts()
            .withf(|_, fallback, status, keywords| {
                *fallback == 60 && status.to_string() == "borrowed" && keywords.len() == 2
            })
            .times(1)
            .returning(|_, _, _, _| Ok(SummaryCounts::default()));

        let stats = tokio_test::assert_ok!(service(store).summary_stats(at(20, 9)).await);
        assert_eq!(stats, SummaryStats::default());
    }

    #[tokio::test]
    async fn test_trend_requests_window_and_fills_gaps() {
        let mut store = MockReportStore::new();
        store
            .expect_daily_borrow_counts()
            .withf(|from, to| *from == day(14) && *to == day(20))
            .returning(|_, _| {
                Ok(vec![
                    DailyCount { day: day(16), total: Some(3) },
                    DailyCount { day: day(20), total: None },
                ])
            });

        let points = service(store).borrowing_trend(day(20)).await.unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(points[2].value, 3);
        assert_eq!(points[6].value, 0);
        assert!(points.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[tokio::test]
    async fn test_compliance_null_sums_are_zero() {
        let mut store = MockReportStore::new();
        store
            .expect_compliance_counts()
            .returning(|_, _| Ok(ComplianceCounts::default()));

        let result = service(store).return_compliance(day(20)).await.unwrap();
        assert_eq!(result, ReturnCompliance::default());
    }

    #[tokio::test]
    async fn test_upcoming_status_text() {
        let mut store = MockReportStore::new();
        store
            .expect_upcoming_returns()
            .withf(|today, fallback, limit| *today == day(20) && *fallback == 60 && *limit == 10)
            .returning(|_, _, _| {
                Ok(vec![
                    UpcomingRow {
                        equipment_code: "NB6".to_string(),
                        equipment_name: "Notebook 6".to_string(),
                        borrower: None,
                        due_date: at(20, 8),
                    },
                    UpcomingRow {
                        equipment_code: "PJ9".to_string(),
                        equipment_name: "Projector P9".to_string(),
                        borrower: Some("Wasana".to_string()),
                        due_date: at(22, 17),
                    },
                ])
            });

        let rows = service(store).upcoming_returns(day(20)).await.unwrap();
        assert_eq!(rows[0].status_text, "due today");
        assert_eq!(rows[0].borrower, "-");
        assert_eq!(rows[1].remaining_days, 2);
        assert_eq!(rows[1].status_text, "due in 2 days");
    }

    #[tokio::test]
    async fn test_activities_merge_both_projections() {
        let mut store = MockReportStore::new();
        store
            .expect_activity_entries()
            .returning(|action, _| {
                let entry = match action {
                    ActionType::Borrow => ActivityEntry {
                        seq: 1,
                        asset: "NB7".to_string(),
                        user: Some("A".to_string()),
                        action_date: at(18, 9),
                    },
                    ActionType::Return => ActivityEntry {
                        seq: 1,
                        asset: "NB7".to_string(),
                        user: Some("B".to_string()),
                        action_date: at(19, 9),
                    },
                };
                Ok(vec![entry])
            });

        let events = service(store).recent_activities().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action_type, ActionType::Return);
        assert_eq!(events[0].message, "B returned NB7");
        assert_eq!(events[1].message, "A borrowed NB7");
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut store = MockReportStore::new();
        store
            .expect_summary_counts()
            .returning(|_, _, _, _| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(store).summary_stats(at(20, 9)).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
