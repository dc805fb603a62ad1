//! Trailing-window borrowing trend

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::{i18n::Locale, models::TrendPoint};

/// The `days` calendar dates ending at `today`, oldest first.
///
/// A window of 0 is widened to 1 so today is always present.
pub fn window(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    let days = i64::from(days.max(1));
    (0..days)
        .rev()
        .map(|back| today - Duration::days(back))
        .collect()
}

/// Left-join observed per-day counts onto the full window, defaulting to 0.
///
/// Counts outside the window are ignored.
pub fn fill(
    window: &[NaiveDate],
    counts: impl IntoIterator<Item = (NaiveDate, i64)>,
    locale: Locale,
) -> Vec<TrendPoint> {
    let mut by_day: HashMap<NaiveDate, i64> = HashMap::new();
    for (day, total) in counts {
        *by_day.entry(day).or_insert(0) += total;
    }

    window
        .iter()
        .map(|day| TrendPoint {
            date: *day,
            label: locale.weekday_label(*day).to_string(),
            value: by_day.get(day).copied().unwrap_or(0),
        })
        .collect()
}
