//! Return compliance percentages

use crate::models::{ComplianceBucket, ReturnCompliance};

/// `count / total * 100` rounded to 2 decimals; 0 when `total` is 0
pub fn percent(count: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Build the three buckets; the total is the sum of the buckets.
pub fn from_counts(on_time: i64, due_today: i64, overdue: i64) -> ReturnCompliance {
    let total = on_time + due_today + overdue;
    let bucket = |count: i64| ComplianceBucket {
        count,
        percent: percent(count, total),
    };
    ReturnCompliance {
        on_time: bucket(on_time),
        due_today: bucket(due_today),
        overdue: bucket(overdue),
    }
}
