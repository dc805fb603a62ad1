//! User-facing strings
//!
//! Every message that leaves the server (failure envelopes, upcoming-return
//! status texts, activity messages, trend labels) is rendered here so the
//! reporting code never embeds a language.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

/// The reporting operations, used to pick the failure message and for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    SummaryStats,
    BorrowingTrend,
    ReturnCompliance,
    UpcomingReturns,
    RecentActivities,
}

impl Report {
    pub fn name(self) -> &'static str {
        match self {
            Report::SummaryStats => "summary_stats",
            Report::BorrowingTrend => "borrowing_trend",
            Report::ReturnCompliance => "return_compliance",
            Report::UpcomingReturns => "upcoming_returns",
            Report::RecentActivities => "recent_activities",
        }
    }
}

impl Locale {
    /// Generic message returned when a report cannot be produced
    pub fn report_failure(self, report: Report) -> &'static str {
        match (self, report) {
            (Locale::Th, Report::SummaryStats) => "เกิดข้อผิดพลาดในการดึงข้อมูลสถิติ",
            (Locale::Th, Report::BorrowingTrend) => "เกิดข้อผิดพลาดในการดึงข้อมูลเทรนด์การยืม",
            (Locale::Th, Report::ReturnCompliance) => "เกิดข้อผิดพลาดในการดึงข้อมูลการคืนอุปกรณ์",
            (Locale::Th, Report::UpcomingReturns) => "เกิดข้อผิดพลาดในการดึงข้อมูลกำหนดคืน",
            (Locale::Th, Report::RecentActivities) => "เกิดข้อผิดพลาดในการดึงกิจกรรมล่าสุด",
            (Locale::En, Report::SummaryStats) => "Failed to load statistics",
            (Locale::En, Report::BorrowingTrend) => "Failed to load borrowing trend",
            (Locale::En, Report::ReturnCompliance) => "Failed to load return compliance",
            (Locale::En, Report::UpcomingReturns) => "Failed to load upcoming returns",
            (Locale::En, Report::RecentActivities) => "Failed to load recent activities",
        }
    }

    pub fn internal_failure(self) -> &'static str {
        match self {
            Locale::Th => "เกิดข้อผิดพลาดภายในระบบ",
            Locale::En => "Internal server error",
        }
    }

    pub fn service_unavailable(self) -> &'static str {
        match self {
            Locale::Th => "ระบบไม่พร้อมให้บริการชั่วคราว",
            Locale::En => "Service temporarily unavailable",
        }
    }

    /// Status text for an outstanding record, from whole days until due
    pub fn due_status(self, remaining_days: i64) -> String {
        match (self, remaining_days) {
            (Locale::Th, 0) => "ครบกำหนดวันนี้".to_string(),
            (Locale::Th, n) if n > 0 => format!("เหลืออีก {} วัน", n),
            (Locale::Th, n) => format!("เกินกำหนด {} วัน", n.abs()),
            (Locale::En, 0) => "due today".to_string(),
            (Locale::En, 1) => "due in 1 day".to_string(),
            (Locale::En, n) if n > 0 => format!("due in {} days", n),
            (Locale::En, -1) => "overdue by 1 day".to_string(),
            (Locale::En, n) => format!("overdue by {} days", n.abs()),
        }
    }

    fn unknown_actor(self) -> &'static str {
        match self {
            Locale::Th => "ผู้ใช้",
            Locale::En => "User",
        }
    }

    pub fn borrow_message(self, actor: Option<&str>, asset: &str) -> String {
        let actor = actor.unwrap_or(self.unknown_actor());
        match self {
            Locale::Th => format!("{} ยืม {}", actor, asset),
            Locale::En => format!("{} borrowed {}", actor, asset),
        }
    }

    pub fn return_message(self, actor: Option<&str>, asset: &str) -> String {
        let actor = actor.unwrap_or(self.unknown_actor());
        match self {
            Locale::Th => format!("{} คืน {}", actor, asset),
            Locale::En => format!("{} returned {}", actor, asset),
        }
    }

    /// Short weekday label used on the trend chart axis
    pub fn weekday_label(self, date: NaiveDate) -> &'static str {
        match (self, date.weekday()) {
            (Locale::Th, Weekday::Mon) => "จ.",
            (Locale::Th, Weekday::Tue) => "อ.",
            (Locale::Th, Weekday::Wed) => "พ.",
            (Locale::Th, Weekday::Thu) => "พฤ.",
            (Locale::Th, Weekday::Fri) => "ศ.",
            (Locale::Th, Weekday::Sat) => "ส.",
            (Locale::Th, Weekday::Sun) => "อา.",
            (Locale::En, Weekday::Mon) => "Mon",
            (Locale::En, Weekday::Tue) => "Tue",
            (Locale::En, Weekday::Wed) => "Wed",
            (Locale::En, Weekday::Thu) => "Thu",
            (Locale::En, Weekday::Fri) => "Fri",
            (Locale::En, Weekday::Sat) => "Sat",
            (Locale::En, Weekday::Sun) => "Sun",
        }
    }
}
