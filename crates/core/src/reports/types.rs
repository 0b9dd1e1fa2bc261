//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::CategoryKind;

/// Raw report query parameters, before validation.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReportQuery {
    /// Year to aggregate. Absent means the current year.
    pub year: Option<i32>,
    /// Month (1-12) to aggregate. Absent means all months of the year.
    pub month: Option<u32>,
}

/// A pre-grouped monthly income/expense row from the transaction store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummaryRow {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Sum of income-category transaction amounts.
    pub total_income: Decimal,
    /// Sum of expense-category transaction amounts.
    pub total_expense: Decimal,
}

/// Aggregated monthly summary. One row per expected month, always.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Total income for the month.
    pub total_income: Decimal,
    /// Total expense for the month.
    pub total_expense: Decimal,
    /// Balance, always `total_income - total_expense`.
    pub balance: Decimal,
}

impl MonthlySummary {
    /// A zero-valued summary for a month with no transactions.
    #[must_use]
    pub const fn zero(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// A pre-grouped per-category monthly total from the transaction store.
///
/// Only materialized for (month, category) pairs that actually had
/// transactions; there are no synthetic zero rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdownRow {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Category ID.
    pub category_id: Uuid,
    /// Category name.
    pub category_name: String,
    /// Category kind.
    pub category_kind: CategoryKind,
    /// Sum of transaction amounts for this category in this month.
    pub total: Decimal,
}
