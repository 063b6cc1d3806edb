#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn row(category: &str, usage_pct: Option<Decimal>) -> SummaryRow {
    SummaryRow {
        category: category.into(),
        annual_budget: dec!(100),
        spent: dec!(0),
        remaining: dec!(100),
        usage_pct,
    }
}

#[test]
fn test_bar_value_hundredths() {
    assert_eq!(bar_value(Some(dec!(0.33))), 33);
    assert_eq!(bar_value(Some(dec!(150))), 15000);
    assert_eq!(bar_value(None), 0);
    assert_eq!(bar_value(Some(dec!(-5))), 0);
}

#[test]
fn test_bar_value_huge_usage_saturates() {
    assert_eq!(bar_value(Some(Decimal::MAX)), u64::MAX);
    assert_eq!(bar_value(Some(dec!(1000000000000000000000))), u64::MAX);
}

#[test]
fn test_bars_max_at_least_full_budget() {
    assert_eq!(bars_max(&[]), FULL_BUDGET_BAR);
    assert_eq!(bars_max(&[row("Ambalaj", Some(dec!(12.5)))]), FULL_BUDGET_BAR);
    assert_eq!(
        bars_max(&[row("Ambalaj", Some(dec!(12.5))), row("Etiket", Some(dec!(250)))]),
        25000
    );
}
