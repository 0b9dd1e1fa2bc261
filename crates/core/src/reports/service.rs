//! Report aggregation engine.

use std::collections::BTreeMap;

use super::period::ReportPeriod;
use super::types::{CategoryBreakdownRow, MonthlySummary, MonthlySummaryRow};

/// Service for assembling reports from pre-grouped store rows.
pub struct ReportService;

impl ReportService {
    /// Builds the complete, chronologically ordered monthly summary for a
    /// resolved period.
    ///
    /// Months in the expected set with no store row are synthesized as
    /// all-zero rows, so a full-year period always yields twelve entries and
    /// a single-month period exactly one. The balance of every row is
    /// recomputed as `total_income - total_expense` rather than trusted from
    /// the store.
    #[must_use]
    pub fn monthly_summary(
        period: &ReportPeriod,
        rows: Vec<MonthlySummaryRow>,
    ) -> Vec<MonthlySummary> {
        // (year, month) is unique per row by construction; BTreeMap keys
        // give the ascending (year, month) ordering for free.
        let mut by_month: BTreeMap<(i32, u32), MonthlySummary> = rows
            .into_iter()
            .map(|row| {
                let summary = MonthlySummary {
                    year: row.year,
                    month: row.month,
                    total_income: row.total_income,
                    total_expense: row.total_expense,
                    balance: row.total_income - row.total_expense,
                };
                ((row.year, row.month), summary)
            })
            .collect();

        let year = period.year();
        for month in period.expected_months() {
            by_month
                .entry((year, month))
                .or_insert_with(|| MonthlySummary::zero(year, month));
        }

        by_month.into_values().collect()
    }

    /// Orders per-category breakdown rows by (year, month, category name).
    ///
    /// Unlike the monthly summary there is no gap-filling here: a category
    /// that had no transactions in a month simply has no row. The category
    /// view is transaction-driven, the summary view is month-indexed.
    #[must_use]
    pub fn category_breakdown(mut rows: Vec<CategoryBreakdownRow>) -> Vec<CategoryBreakdownRow> {
        rows.sort_by(|a, b| {
            (a.year, a.month, &a.category_name).cmp(&(b.year, b.month, &b.category_name))
        });
        rows
    }
}
