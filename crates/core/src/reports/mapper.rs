//! Report response shaping.
//!
//! Pure projections from aggregate rows to the response contract: no
//! filtering, no computation, input order preserved.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::types::{CategoryBreakdownRow, MonthlySummary};

/// Monthly summary row in the response contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummaryResponse {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Total income.
    pub total_income: Decimal,
    /// Total expense.
    pub total_expense: Decimal,
    /// Balance (income - expense).
    pub balance: Decimal,
}

/// Category breakdown row in the response contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdownResponse {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Category ID.
    pub category_id: Uuid,
    /// Category name.
    pub category_name: String,
    /// Category kind label ("income" or "expense").
    pub category_kind: &'static str,
    /// Total for this category in this month.
    pub total: Decimal,
}

/// Maps monthly summaries to response rows.
#[must_use]
pub fn map_summaries(summaries: Vec<MonthlySummary>) -> Vec<MonthlySummaryResponse> {
    summaries
        .into_iter()
        .map(|s| MonthlySummaryResponse {
            year: s.year,
            month: s.month,
            total_income: s.total_income,
            total_expense: s.total_expense,
            balance: s.balance,
        })
        .collect()
}

/// Maps category breakdown rows to response rows.
#[must_use]
pub fn map_breakdowns(rows: Vec<CategoryBreakdownRow>) -> Vec<CategoryBreakdownResponse> {
    rows.into_iter()
        .map(|r| CategoryBreakdownResponse {
            year: r.year,
            month: r.month,
            category_id: r.category_id,
            category_name: r.category_name,
            category_kind: r.category_kind.label(),
            total: r.total,
        })
        .collect()
}
