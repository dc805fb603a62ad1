//! Derived due dates

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// `date_out` plus the agreed duration, or `fallback_days` when none was agreed
pub fn due_date(date_out: NaiveDateTime, num_date: Option<i32>, fallback_days: i32) -> NaiveDateTime {
    date_out + Duration::days(i64::from(num_date.unwrap_or(fallback_days)))
}

/// Whole calendar days from `today` to the due date (negative once past)
pub fn remaining_days(due: NaiveDateTime, today: NaiveDate) -> i64 {
    (due.date() - today).num_days()
}

/// Classification of an outstanding record relative to today.
///
/// Computed on every call; it changes as days pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Due date still ahead
    Pending,
    DueToday,
    Overdue,
}

impl DueStatus {
    pub fn classify(due: NaiveDateTime, today: NaiveDate) -> Self {
        match remaining_days(due, today) {
            0 => DueStatus::DueToday,
            n if n > 0 => DueStatus::Pending,
            _ => DueStatus::Overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    #[test]
    fn test_remaining_days_ignores_time_of_day() {
        let due = day(20).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(remaining_days(due, day(20)), 0);
        assert_eq!(remaining_days(due, day(17)), 3);
        assert_eq!(remaining_days(due, day(21)), -1);
    }

    #[test]
    fn test_classification_is_exclusive() {
        let due = day(20).and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(DueStatus::classify(due, day(19)), DueStatus::Pending);
        assert_eq!(DueStatus::classify(due, day(20)), DueStatus::DueToday);
        assert_eq!(DueStatus::classify(due, day(21)), DueStatus::Overdue);
    }

    #[test]
    fn test_negative_duration_is_honoured() {
        let out = day(20).and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(due_date(out, Some(0), 60), out);
        assert_eq!(due_date(out, Some(-1), 60).date(), day(19));
    }
}
