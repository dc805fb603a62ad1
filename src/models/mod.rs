//! Data models for the equipment dashboard

pub mod dashboard;
pub mod envelope;
pub mod inventory;

// Re-export commonly used types
pub use dashboard::{
    ActionType, ActivityEvent, ComplianceBucket, ReturnCompliance, SummaryStats, TrendPoint,
    UpcomingReturn,
};
pub use envelope::{ApiResponse, RequestTimer};
pub use inventory::{BorrowRecord, StockItem};
