//! Monthly financial report generation.
//!
//! This module provides pure business logic for the two report shapes:
//! - Monthly Summary (income/expense/balance per month, gap-filled)
//! - Category Breakdown (per-category monthly totals, never gap-filled)

pub mod mapper;
pub mod period;
pub mod service;
pub mod types;


pub use period::{MIN_REPORT_YEAR, ReportPeriod};
pub use service::ReportService;
pub use types::*;
