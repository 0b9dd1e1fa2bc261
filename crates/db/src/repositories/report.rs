//! Report repository for aggregation queries.
//!
//! Fetches transactions scoped to a reporting period and reduces them to
//! the row shapes the aggregation engine consumes. Only transactions of
//! active categories contribute to reports.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use fluxo_core::category::CategoryKind;
use fluxo_core::reports::{CategoryBreakdownRow, MonthlySummaryRow};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{categories, transactions};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The period does not describe valid calendar dates.
    #[error("Invalid reporting period: year {year}, month {month:?}")]
    InvalidPeriod {
        /// Requested year.
        year: i32,
        /// Requested month, if any.
        month: Option<u32>,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A transaction projected to the fields reports need.
#[derive(Debug, Clone)]
struct ReportEntry {
    occurred_at: NaiveDate,
    amount: Decimal,
    category_id: Uuid,
    category_name: String,
    category_kind: CategoryKind,
}

/// Report repository for aggregation queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: Arc<DatabaseConnection>,
}

impl ReportRepository {
    /// Creates a new report repository over a shared connection pool.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Fetches per-month income and expense totals for the period.
    ///
    /// Months without transactions produce no row; the aggregation engine
    /// fills the gaps.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is not a valid calendar range or the
    /// database query fails.
    pub async fn monthly_summary_rows(
        &self,
        year: i32,
        month: Option<u32>,
    ) -> Result<Vec<MonthlySummaryRow>, ReportError> {
        let entries = self.fetch_entries(year, month).await?;
        Ok(summarize_by_month(&entries))
    }

    /// Fetches per-month, per-category totals for the period.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is not a valid calendar range or the
    /// database query fails.
    pub async fn category_breakdown_rows(
        &self,
        year: i32,
        month: Option<u32>,
    ) -> Result<Vec<CategoryBreakdownRow>, ReportError> {
        let entries = self.fetch_entries(year, month).await?;
        Ok(group_by_category(entries))
    }

    /// Fetches active-category transactions within the period bounds.
    async fn fetch_entries(
        &self,
        year: i32,
        month: Option<u32>,
    ) -> Result<Vec<ReportEntry>, ReportError> {
        let (start, end) =
            period_bounds(year, month).ok_or(ReportError::InvalidPeriod { year, month })?;

        let rows = transactions::Entity::find()
            .find_also_related(categories::Entity)
            .filter(transactions::Column::OccurredAt.gte(start))
            .filter(transactions::Column::OccurredAt.lt(end))
            .filter(categories::Column::Active.eq(true))
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(transaction, category)| {
                category.map(|c| ReportEntry {
                    occurred_at: transaction.occurred_at,
                    amount: transaction.amount,
                    category_id: c.id,
                    category_name: c.name,
                    category_kind: c.kind.into(),
                })
            })
            .collect())
    }
}

/// Computes the half-open date range `[start, end)` for a reporting period.
///
/// Returns `None` if the inputs do not form valid calendar dates.
fn period_bounds(year: i32, month: Option<u32>) -> Option<(NaiveDate, NaiveDate)> {
    match month {
        None => {
            let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
            let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
            Some((start, end))
        }
        Some(m) => {
            let start = NaiveDate::from_ymd_opt(year, m, 1)?;
            let end = if m == 12 {
                NaiveDate::from_ymd_opt(year + 1, 1, 1)?
            } else {
                NaiveDate::from_ymd_opt(year, m + 1, 1)?
            };
            Some((start, end))
        }
    }
}

/// Reduces entries to one income/expense total per calendar month.
fn summarize_by_month(entries: &[ReportEntry]) -> Vec<MonthlySummaryRow> {
    let mut months: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();

    for entry in entries {
        let key = (entry.occurred_at.year(), entry.occurred_at.month());
        let totals = months.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
        match entry.category_kind {
            CategoryKind::Income => totals.0 += entry.amount,
            CategoryKind::Expense => totals.1 += entry.amount,
        }
    }

    months
        .into_iter()
        .map(|((year, month), (total_income, total_expense))| MonthlySummaryRow {
            year,
            month,
            total_income,
            total_expense,
        })
        .collect()
}

/// Reduces entries to one total per calendar month and category.
fn group_by_category(entries: Vec<ReportEntry>) -> Vec<CategoryBreakdownRow> {
    let mut groups: BTreeMap<(i32, u32, Uuid), CategoryBreakdownRow> = BTreeMap::new();

    for entry in entries {
        let key = (
            entry.occurred_at.year(),
            entry.occurred_at.month(),
            entry.category_id,
        );
        groups
            .entry(key)
            .and_modify(|row| row.total += entry.amount)
            .or_insert(CategoryBreakdownRow {
                year: entry.occurred_at.year(),
                month: entry.occurred_at.month(),
                category_id: entry.category_id,
                category_name: entry.category_name,
                category_kind: entry.category_kind,
                total: entry.amount,
            });
    }

    groups.into_values().collect()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
