//! Dashboard aggregation composer
//!
//! [`compose`] turns the five report payloads into the dashboard view. It is
//! a pure function: the whole view is recomputed from its inputs, and any
//! missing dataset degrades to zeros or an empty list.

pub mod client;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    ActionType, ActivityEvent, ReturnCompliance, SummaryStats, TrendPoint, UpcomingReturn,
};

pub use client::{DashboardClient, Session};

/// Upcoming returns within this many days count as "due this week"
pub const DUE_SOON_DAYS: i64 = 7;

/// Report payloads as fetched; `None` marks a dataset that failed to load.
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    pub stats: Option<SummaryStats>,
    pub trend: Option<Vec<TrendPoint>>,
    pub compliance: Option<ReturnCompliance>,
    pub upcoming: Option<Vec<UpcomingReturn>>,
    pub activities: Option<Vec<ActivityEvent>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBorrower {
    pub user: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: SummaryStats,
    pub trend: Vec<TrendPoint>,
    /// Sum of the trend values
    pub trend_total: i64,
    pub compliance: ReturnCompliance,
    pub upcoming: Vec<UpcomingReturn>,
    pub activities: Vec<ActivityEvent>,
    pub due_this_week: usize,
    pub top_borrower: Option<TopBorrower>,
    pub late_follow_ups: i64,
}

/// Upcoming entries with `remaining_days` in `[0, DUE_SOON_DAYS]`
pub fn due_this_week(upcoming: &[UpcomingReturn]) -> usize {
    upcoming
        .iter()
        .filter(|u| (0..=DUE_SOON_DAYS).contains(&u.remaining_days))
        .count()
}

/// Most frequent actor among borrow events; ties go to whoever appears first.
pub fn top_borrower(activities: &[ActivityEvent]) -> Option<TopBorrower> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for event in activities.iter().filter(|e| e.action_type == ActionType::Borrow) {
        let count = counts.entry(event.user.as_str()).or_insert(0);
        if *count == 0 {
            order.push(event.user.as_str());
        }
        *count += 1;
    }

    let mut best: Option<TopBorrower> = None;
    for user in order {
        let count = counts[user];
        if best.as_ref().map_or(true, |b| count > b.count) {
            best = Some(TopBorrower {
                user: user.to_string(),
                count,
            });
        }
    }
    best
}

pub fn compose(inputs: DashboardInputs) -> DashboardView {
    let stats = inputs.stats.unwrap_or_default();
    let trend = inputs.trend.unwrap_or_default();
    let upcoming = inputs.upcoming.unwrap_or_default();
    let activities = inputs.activities.unwrap_or_default();

    DashboardView {
        trend_total: trend.iter().map(|p| p.value).sum(),
        due_this_week: due_this_week(&upcoming),
        top_borrower: top_borrower(&activities),
        late_follow_ups: stats.late_returns,
        compliance: inputs.compliance.unwrap_or_default(),
        stats,
        trend,
        upcoming,
        activities,
    }
}
