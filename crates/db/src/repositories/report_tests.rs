//! Tests for report period bounds and in-memory aggregation.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::{ReportEntry, group_by_category, period_bounds, summarize_by_month};
use fluxo_core::category::CategoryKind;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn entry(occurred_at: NaiveDate, amount: &str, kind: CategoryKind) -> ReportEntry {
    ReportEntry {
        occurred_at,
        amount: amount.parse().unwrap(),
        category_id: Uuid::new_v4(),
        category_name: "Test".to_string(),
        category_kind: kind,
    }
}

#[rstest]
#[case(2025, None, date(2025, 1, 1), date(2026, 1, 1))]
#[case(2025, Some(4), date(2025, 4, 1), date(2025, 5, 1))]
#[case(2025, Some(12), date(2025, 12, 1), date(2026, 1, 1))]
#[case(2024, Some(2), date(2024, 2, 1), date(2024, 3, 1))]
fn test_period_bounds(
    #[case] year: i32,
    #[case] month: Option<u32>,
    #[case] start: NaiveDate,
    #[case] end: NaiveDate,
) {
    assert_eq!(period_bounds(year, month), Some((start, end)));
}

#[test]
fn test_period_bounds_rejects_invalid_month() {
    assert_eq!(period_bounds(2025, Some(13)), None);
    assert_eq!(period_bounds(2025, Some(0)), None);
}

#[test]
fn test_summarize_splits_income_and_expense() {
    let entries = vec![
        entry(date(2025, 4, 10), "1000.00", CategoryKind::Income),
        entry(date(2025, 4, 20), "300.00", CategoryKind::Expense),
        entry(date(2025, 4, 25), "200.00", CategoryKind::Expense),
    ];

    let rows = summarize_by_month(&entries);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].year, 2025);
    assert_eq!(rows[0].month, 4);
    assert_eq!(rows[0].total_income, dec!(1000.00));
    assert_eq!(rows[0].total_expense, dec!(500.00));
}

#[test]
fn test_summarize_groups_by_month_in_order() {
    let entries = vec![
        entry(date(2025, 9, 1), "50.00", CategoryKind::Expense),
        entry(date(2025, 2, 1), "10.00", CategoryKind::Income),
        entry(date(2025, 9, 2), "25.00", CategoryKind::Income),
    ];

    let rows = summarize_by_month(&entries);

    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].year, rows[0].month), (2025, 2));
    assert_eq!((rows[1].year, rows[1].month), (2025, 9));
    assert_eq!(rows[1].total_income, dec!(25.00));
    assert_eq!(rows[1].total_expense, dec!(50.00));
}

#[test]
fn test_summarize_empty_input() {
    assert!(summarize_by_month(&[]).is_empty());
}

#[test]
fn test_group_by_category_sums_within_month() {
    let salary = entry(date(2025, 3, 5), "5000.00", CategoryKind::Income);
    let salary_id = salary.category_id;
    let mut bonus = entry(date(2025, 3, 28), "1500.00", CategoryKind::Income);
    bonus.category_id = salary_id;

    let rows = group_by_category(vec![salary, bonus]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total, dec!(6500.00));
    assert_eq!(rows[0].category_id, salary_id);
}

#[test]
fn test_group_by_category_keeps_months_apart() {
    let march = entry(date(2025, 3, 5), "100.00", CategoryKind::Expense);
    let mut april = entry(date(2025, 4, 5), "200.00", CategoryKind::Expense);
    april.category_id = march.category_id;

    let rows = group_by_category(vec![march, april]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].month, 3);
    assert_eq!(rows[0].total, dec!(100.00));
    assert_eq!(rows[1].month, 4);
    assert_eq!(rows[1].total, dec!(200.00));
}
