//! Report payloads served under `/dashboard`

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline counters for the stat cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Enabled stock items
    pub total_equipments: i64,
    /// Enabled stock currently marked as borrowed
    pub borrowed: i64,
    /// Outstanding records past their due date
    pub late_returns: i64,
    /// Enabled stock whose status mentions maintenance or repair
    pub maintenance: i64,
}

/// Borrow volume for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrendPoint {
    #[schema(value_type = String, example = "2025-11-20")]
    pub date: NaiveDate,
    /// Short weekday label
    #[schema(example = "Thu")]
    pub label: String,
    /// Number of borrows on that day
    pub value: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComplianceBucket {
    pub count: i64,
    /// Share of evaluated records, rounded to 2 decimals
    #[schema(example = 72.5)]
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnCompliance {
    /// Returned on or before the due date
    pub on_time: ComplianceBucket,
    /// Still out and due today
    pub due_today: ComplianceBucket,
    /// Still out and past the due date
    pub overdue: ComplianceBucket,
}

/// Outstanding record due today or later
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingReturn {
    pub code: String,
    pub asset: String,
    /// Borrower name, `-` when unknown
    pub borrower: String,
    #[schema(value_type = String, example = "2025-11-22T09:30:00")]
    pub due_date: NaiveDateTime,
    /// Whole calendar days from today until the due date
    pub remaining_days: i64,
    #[schema(example = "due in 2 days")]
    pub status_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Borrow,
    Return,
}

/// Entry of the recent activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub record_seq: i32,
    pub asset: String,
    /// Actor name, `-` when unknown
    pub user: String,
    pub action_type: ActionType,
    #[schema(value_type = String, example = "2025-11-20T14:05:00")]
    pub action_date: NaiveDateTime,
    #[schema(example = "Somsak borrowed NB7")]
    pub message: String,
}
