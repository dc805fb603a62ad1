//! Equipment Dashboard Server
//!
//! Read-only reporting backend for the equipment borrow/return inventory:
//! five aggregate reports served as JSON envelopes, plus the client-side
//! composer that turns them into a dashboard view.

use std::sync::Arc;

use chrono::NaiveDateTime;

pub mod api;
pub mod composer;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod reports;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Source of "now" for report evaluation (server-local wall clock)
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(|| chrono::Local::now().naive_local())
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub clock: Clock,
}

impl AppState {
    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}
