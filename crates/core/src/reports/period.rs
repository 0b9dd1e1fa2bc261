//! Report query validation and period resolution.
//!
//! A query resolves to one of three period modes: the current year (both
//! parameters absent), a specific year (all months), or a specific
//! year-month. A month without a year is rejected. Validation accumulates
//! every violated rule into a single message instead of short-circuiting.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use fluxo_shared::{AppError, AppResult};

use super::types::ReportQuery;

/// Oldest year accepted by report queries.
pub const MIN_REPORT_YEAR: i32 = 2000;

/// A resolved aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// All twelve months of the current (wall-clock) year.
    CurrentYear {
        /// The anchored year.
        year: i32,
    },
    /// All twelve months of a specific year.
    Year {
        /// Requested year.
        year: i32,
    },
    /// A single month of a specific year.
    Month {
        /// Requested year.
        year: i32,
        /// Requested month (1-12).
        month: u32,
    },
}

impl ReportPeriod {
    /// The year this period aggregates over.
    #[must_use]
    pub const fn year(&self) -> i32 {
        match self {
            Self::CurrentYear { year } | Self::Year { year } | Self::Month { year, .. } => *year,
        }
    }

    /// The month filter to pass to the transaction store, if any.
    #[must_use]
    pub const fn month_filter(&self) -> Option<u32> {
        match self {
            Self::CurrentYear { .. } | Self::Year { .. } => None,
            Self::Month { month, .. } => Some(*month),
        }
    }

    /// The months a complete summary must cover: all twelve for a full-year
    /// period, exactly one for a single-month period.
    #[must_use]
    pub const fn expected_months(&self) -> RangeInclusive<u32> {
        match self {
            Self::CurrentYear { .. } | Self::Year { .. } => 1..=12,
            Self::Month { month, .. } => *month..=*month,
        }
    }

    /// A short label for export file naming, e.g. "2025" or "2025-04".
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::CurrentYear { year } | Self::Year { year } => format!("{year}"),
            Self::Month { year, month } => format!("{year}-{month:02}"),
        }
    }
}

impl ReportQuery {
    /// Validates the query and resolves it into a [`ReportPeriod`].
    ///
    /// All violated rules are accumulated and joined with "; " so callers
    /// see every problem at once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when any rule fails.
    pub fn resolve(&self, today: NaiveDate) -> AppResult<ReportPeriod> {
        let errors = self.validation_errors(today.year());
        if !errors.is_empty() {
            return Err(AppError::Validation(errors.join("; ")));
        }

        Ok(match (self.year, self.month) {
            (None, None) => ReportPeriod::CurrentYear { year: today.year() },
            (Some(year), None) => ReportPeriod::Year { year },
            (Some(year), Some(month)) => ReportPeriod::Month { year, month },
            // Rejected by validation above: month requires year.
            (None, Some(_)) => unreachable!("validation rejects month without year"),
        })
    }

    fn validation_errors(&self, current_year: i32) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(year) = self.year
            && !(MIN_REPORT_YEAR..=current_year).contains(&year)
        {
            errors.push(format!(
                "year must be between {MIN_REPORT_YEAR} and {current_year}"
            ));
        }

        if let Some(month) = self.month
            && !(1..=12).contains(&month)
        {
            errors.push("month must be between 1 and 12".to_string());
        }

        if self.month.is_some() && self.year.is_none() {
            errors.push("year must be provided when month is specified".to_string());
        }

        errors
    }
}
