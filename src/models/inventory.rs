//! Inventory tables read by the reporting layer
//!
//! Both tables belong to the inventory/borrowing system. This service only
//! reads them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::reports::due;

/// Stock item (one physical piece of equipment)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockItem {
    pub equipment_code: String,
    pub equipment_name: String,
    pub enabled: bool,
    /// Free-text status, e.g. "borrowed", "available", "Under maintenance"
    pub status: Option<String>,
}

impl StockItem {
    pub fn has_status(&self, marker: &str) -> bool {
        self.status.as_deref() == Some(marker)
    }

    /// Case-insensitive substring match of the status against any keyword
    pub fn is_under_maintenance(&self, keywords: &[String]) -> bool {
        match self.status.as_deref() {
            Some(status) => {
                let status = status.to_lowercase();
                keywords.iter().any(|k| status.contains(&k.to_lowercase()))
            }
            None => false,
        }
    }
}

/// Borrow record: one check-out, and its check-in once returned
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BorrowRecord {
    pub seq: i32,
    /// References `StockItem::equipment_code`
    pub code: String,
    pub user_out: Option<String>,
    pub user_in: Option<String>,
    pub date_out: Option<NaiveDateTime>,
    /// `None` while the item is still out
    pub date_in: Option<NaiveDateTime>,
    /// Agreed borrow duration in days
    pub num_date: Option<i32>,
}

impl BorrowRecord {
    pub fn is_outstanding(&self) -> bool {
        self.date_in.is_none()
    }

    pub fn due_date(&self, fallback_days: i32) -> Option<NaiveDateTime> {
        self.date_out
            .map(|out| due::due_date(out, self.num_date, fallback_days))
    }

    /// Outstanding and past its due date at `now`
    pub fn is_late(&self, now: NaiveDateTime, fallback_days: i32) -> bool {
        self.is_outstanding()
            && self
                .due_date(fallback_days)
                .map(|due| due < now)
                .unwrap_or(false)
    }

    /// Returned no later than its due date
    pub fn returned_on_time(&self, fallback_days: i32) -> bool {
        match (self.date_in, self.due_date(fallback_days)) {
            (Some(returned), Some(due)) => returned <= due,
            _ => false,
        }
    }

    /// Due classification of an outstanding record; `None` once returned
    pub fn due_status(&self, today: NaiveDate, fallback_days: i32) -> Option<due::DueStatus> {
        if !self.is_outstanding() {
            return None;
        }
        self.due_date(fallback_days)
            .map(|d| due::DueStatus::classify(d, today))
    }
}
