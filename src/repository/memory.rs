//! In-memory report store
//!
//! Evaluates the dashboard reports over plain `StockItem`/`BorrowRecord`
//! vectors using the same rules the SQL encodes. Backs the API test suites.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::{ComplianceCounts, DailyCount, ReportStore, SummaryCounts, UpcomingRow};
use crate::{
    error::AppResult,
    models::{ActionType, BorrowRecord, StockItem},
    reports::{activity::ActivityEntry, due::DueStatus},
};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stock: Vec<StockItem>,
    records: Vec<BorrowRecord>,
    employees: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(mut self, item: StockItem) -> Self {
        self.stock.push(item);
        self
    }

    pub fn with_record(mut self, record: BorrowRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_employee(mut self, emp_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.employees.insert(emp_id.into(), name.into());
        self
    }

    fn item(&self, code: &str) -> Option<&StockItem> {
        self.stock.iter().find(|s| s.equipment_code == code)
    }

    fn employee(&self, emp_id: Option<&String>) -> Option<String> {
        emp_id.and_then(|id| self.employees.get(id)).cloned()
    }
}

fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit.max(0)).unwrap_or(usize::MAX)
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn summary_counts(
        &self,
        now: NaiveDateTime,
        fallback_days: i32,
        borrowed_status: &str,
        maintenance_keywords: &[String],
    ) -> AppResult<SummaryCounts> {
        let enabled: Vec<&StockItem> = self.stock.iter().filter(|s| s.enabled).collect();
        let count = |n: usize| Some(n as i64);

        Ok(SummaryCounts {
            total_equipments: count(enabled.len()),
            borrowed: count(enabled.iter().filter(|s| s.has_status(borrowed_status)).count()),
            late_returns: count(
                self.records
                    .iter()
                    .filter(|r| r.is_late(now, fallback_days))
                    .count(),
            ),
            maintenance: count(
                enabled
                    .iter()
                    .filter(|s| s.is_under_maintenance(maintenance_keywords))
                    .count(),
            ),
        })
    }

    async fn daily_borrow_counts(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<DailyCount>> {
        let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for day in self.records.iter().filter_map(|r| r.date_out.map(|d| d.date())) {
            if day >= from && day <= to {
                *by_day.entry(day).or_insert(0) += 1;
            }
        }
        Ok(by_day
            .into_iter()
            .map(|(day, total)| DailyCount { day, total: Some(total) })
            .collect())
    }

    async fn compliance_counts(&self, today: NaiveDate, fallback_days: i32) -> AppResult<ComplianceCounts> {
        // SUM over zero rows is NULL in SQL
        if self.records.is_empty() {
            return Ok(ComplianceCounts::default());
        }

        let (mut on_time, mut due_today, mut overdue) = (0, 0, 0);
        for record in &self.records {
            if record.returned_on_time(fallback_days) {
                on_time += 1;
            }
            match record.due_status(today, fallback_days) {
                Some(DueStatus::DueToday) => due_today += 1,
                Some(DueStatus::Overdue) => overdue += 1,
                _ => {}
            }
        }

        Ok(ComplianceCounts {
            on_time: Some(on_time),
            due_today: Some(due_today),
            overdue: Some(overdue),
        })
    }

    async fn upcoming_returns(
        &self,
        today: NaiveDate,
        fallback_days: i32,
        limit: i64,
    ) -> AppResult<Vec<UpcomingRow>> {
        let start = today.and_time(chrono::NaiveTime::MIN);
        let mut rows: Vec<(i32, UpcomingRow)> = self
            .records
            .iter()
            .filter(|r| r.is_outstanding())
            .filter_map(|r| {
                let due_date = r.due_date(fallback_days)?;
                let item = self.item(&r.code)?;
                (due_date >= start).then(|| {
                    (
                        r.seq,
                        UpcomingRow {
                            equipment_code: item.equipment_code.clone(),
                            equipment_name: item.equipment_name.clone(),
                            borrower: self.employee(r.user_out.as_ref()),
                            due_date,
                        },
                    )
                })
            })
            .collect();

        rows.sort_by(|(seq_a, a), (seq_b, b)| a.due_date.cmp(&b.due_date).then(seq_a.cmp(seq_b)));
        rows.truncate(clamp_limit(limit));
        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }

    async fn activity_entries(&self, action: ActionType, limit: i64) -> AppResult<Vec<ActivityEntry>> {
        let mut entries: Vec<ActivityEntry> = self
            .records
            .iter()
            .filter_map(|r| {
                let (date, actor) = match action {
                    ActionType::Borrow => (r.date_out?, r.user_out.as_ref()),
                    ActionType::Return => (r.date_in?, r.user_in.as_ref()),
                };
                let item = self.item(&r.code)?;
                Some(ActivityEntry {
                    seq: r.seq,
                    asset: item.equipment_name.clone(),
                    user: self.employee(actor),
                    action_date: date,
                })
            })
            .collect();

        entries.sort_by(|a, b| b.action_date.cmp(&a.action_date).then(b.seq.cmp(&a.seq)));
        entries.truncate(clamp_limit(limit));
        Ok(entries)
    }
}
