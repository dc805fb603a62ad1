//! Dashboard report queries on Repository (PostgreSQL)

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use sqlx::Row;

use super::{ComplianceCounts, DailyCount, ReportStore, Repository, SummaryCounts, UpcomingRow};
use crate::{error::AppResult, models::ActionType, reports::activity::ActivityEntry};

/// `LIKE` patterns for a case-insensitive substring match on lowered status
fn contains_patterns(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| format!("%{}%", k.to_lowercase()))
        .collect()
}

fn start_of(day: NaiveDate) -> NaiveDateTime {
    day.and_time(chrono::NaiveTime::MIN)
}

#[async_trait]
impl ReportStore for Repository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn summary_counts(
        &self,
        now: NaiveDateTime,
        fallback_days: i32,
        borrowed_status: &str,
        maintenance_keywords: &[String],
    ) -> AppResult<SummaryCounts> {
        let counts = sqlx::query_as::<_, SummaryCounts>(
            r#"
            SELECT
              (SELECT COUNT(*) FROM stock_items WHERE enabled) AS total_equipments,
              (SELECT COUNT(*) FROM stock_items WHERE enabled AND status = $1) AS borrowed,
              (
                SELECT COUNT(*)
                FROM borrow_records
                WHERE date_in IS NULL
                  AND date_out + make_interval(days => COALESCE(num_date, $2)) < $3
              ) AS late_returns,
              (
                SELECT COUNT(*)
                FROM stock_items
                WHERE enabled
                  AND status IS NOT NULL
                  AND LOWER(status) LIKE ANY($4)
              ) AS maintenance
            "#,
        )
        .bind(borrowed_status)
        .bind(fallback_days)
        .bind(now)
        .bind(contains_patterns(maintenance_keywords))
        .fetch_optional(&self.pool)
        .await?;

        Ok(counts.unwrap_or_default())
    }

    async fn daily_borrow_counts(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<DailyCount>> {
        let rows = sqlx::query_as::<_, DailyCount>(
            r#"
            SELECT CAST(date_out AS DATE) AS day, COUNT(*) AS total
            FROM borrow_records
            WHERE date_out >= $1 AND date_out < $2
            GROUP BY CAST(date_out AS DATE)
            ORDER BY day
            "#,
        )
        .bind(start_of(from))
        .bind(start_of(to + Duration::days(1)))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn compliance_counts(&self, today: NaiveDate, fallback_days: i32) -> AppResult<ComplianceCounts> {
        // due_today and overdue compare calendar dates so the buckets stay disjoint
        let counts = sqlx::query_as::<_, ComplianceCounts>(
            r#"
            WITH due AS (
              SELECT date_in,
                     date_out + make_interval(days => COALESCE(num_date, $1)) AS due_date
              FROM borrow_records
            )
            SELECT
              SUM(CASE WHEN date_in IS NOT NULL AND date_in <= due_date
                       THEN 1 ELSE 0 END) AS on_time,
              SUM(CASE WHEN date_in IS NULL AND CAST(due_date AS DATE) = $2
                       THEN 1 ELSE 0 END) AS due_today,
              SUM(CASE WHEN date_in IS NULL AND CAST(due_date AS DATE) < $2
                       THEN 1 ELSE 0 END) AS overdue
            FROM due
            "#,
        )
        .bind(fallback_days)
        .bind(today)
        .fetch_optional(&self.pool)
        .await?;

        Ok(counts.unwrap_or_default())
    }

    async fn upcoming_returns(
        &self,
        today: NaiveDate,
        fallback_days: i32,
        limit: i64,
    ) -> AppResult<Vec<UpcomingRow>> {
        let rows = sqlx::query_as::<_, UpcomingRow>(
            r#"
            SELECT s.equipment_code,
                   s.equipment_name,
                   e.emp_name AS borrower,
                   r.date_out + make_interval(days => COALESCE(r.num_date, $1)) AS due_date
            FROM borrow_records r
            JOIN stock_items s ON r.code = s.equipment_code
            LEFT JOIN employees e ON r.user_out = e.emp_id
            WHERE r.date_in IS NULL
              AND r.date_out + make_interval(days => COALESCE(r.num_date, $1)) >= $2
            ORDER BY due_date, r.seq
            LIMIT $3
            "#,
        )
        .bind(fallback_days)
        .bind(start_of(today))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn activity_entries(&self, action: ActionType, limit: i64) -> AppResult<Vec<ActivityEntry>> {
        let query = match action {
            ActionType::Borrow => {
                r#"
                SELECT r.seq, s.equipment_name, e.emp_name, r.date_out AS action_date
                FROM borrow_records r
                JOIN stock_items s ON r.code = s.equipment_code
                LEFT JOIN employees e ON r.user_out = e.emp_id
                WHERE r.date_out IS NOT NULL
                ORDER BY r.date_out DESC, r.seq DESC
                LIMIT $1
                "#
            }
            ActionType::Return => {
                r#"
                SELECT r.seq, s.equipment_name, e.emp_name, r.date_in AS action_date
                FROM borrow_records r
                JOIN stock_items s ON r.code = s.equipment_code
                LEFT JOIN employees e ON r.user_in = e.emp_id
                WHERE r.date_in IS NOT NULL
                ORDER BY r.date_in DESC, r.seq DESC
                LIMIT $1
                "#
            }
        };

        let entries = sqlx::query(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|row| ActivityEntry {
                seq: row.get("seq"),
                asset: row.get("equipment_name"),
                user: row.get("emp_name"),
                action_date: row.get("action_date"),
            })
            .collect();

        Ok(entries)
    }
}
