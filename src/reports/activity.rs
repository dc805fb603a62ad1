//! Activity feed: borrow and return projections merged in descending time order

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::{
    i18n::Locale,
    models::{ActionType, ActivityEvent},
};

/// One projected row of the feed before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub seq: i32,
    pub asset: String,
    pub user: Option<String>,
    pub action_date: NaiveDateTime,
}

impl ActivityEntry {
    pub fn render(self, action: ActionType, locale: Locale) -> ActivityEvent {
        let message = match action {
            ActionType::Borrow => locale.borrow_message(self.user.as_deref(), &self.asset),
            ActionType::Return => locale.return_message(self.user.as_deref(), &self.asset),
        };
        ActivityEvent {
            record_seq: self.seq,
            user: self.user.unwrap_or_else(|| "-".to_string()),
            asset: self.asset,
            action_type: action,
            action_date: self.action_date,
            message,
        }
    }
}

/// Newest first; for equal timestamps higher seq first, then returns before borrows.
fn newest_first(a: &ActivityEvent, b: &ActivityEvent) -> Ordering {
    b.action_date
        .cmp(&a.action_date)
        .then_with(|| b.record_seq.cmp(&a.record_seq))
        .then_with(|| rank(a.action_type).cmp(&rank(b.action_type)))
}

fn rank(action: ActionType) -> u8 {
    match action {
        ActionType::Return => 0,
        ActionType::Borrow => 1,
    }
}

/// Tag both projections, merge them, and keep the newest `limit` events.
pub fn merge(
    borrows: Vec<ActivityEntry>,
    returns: Vec<ActivityEntry>,
    limit: usize,
    locale: Locale,
) -> Vec<ActivityEvent> {
    let mut events: Vec<ActivityEvent> = borrows
        .into_iter()
        .map(|e| e.render(ActionType::Borrow, locale))
        .chain(returns.into_iter().map(|e| e.render(ActionType::Return, locale)))
        .collect();
    events.sort_by(newest_first);
    events.truncate(limit);
    events
}
