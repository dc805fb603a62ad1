//! Business logic services

pub mod dashboard;

use std::sync::Arc;

use crate::{config::ReportingConfig, repository::ReportStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services over the given report store
    pub fn new(store: Arc<dyn ReportStore>, reporting: ReportingConfig) -> Self {
        Self {
            dashboard: dashboard::DashboardService::new(store, reporting),
        }
    }
}
