//! Reporting rules
//!
//! Pure functions behind the dashboard reports: due-date arithmetic, the
//! trend window, compliance percentages and the activity feed merge. Storage
//! backends fetch raw rows; everything that decides what a number means lives
//! here.

pub mod activity;
pub mod compliance;
pub mod due;
pub mod trend;
