#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

// ── OrderRecord ───────────────────────────────────────────────

#[test]
fn test_order_amount_is_quantity_times_price() {
    let order = OrderRecord::new(day(), "Ambalaj", 100, dec!(10.00)).unwrap();
    assert_eq!(order.amount(), dec!(1000));
    assert_eq!(order.quantity(), 100);
    assert_eq!(order.unit_price(), dec!(10.00));
    assert_eq!(order.category(), "Ambalaj");
    assert_eq!(order.date(), day());
}

#[test]
fn test_order_fractional_price() {
    let order = OrderRecord::new(day(), "Etiket", 3, dec!(0.01)).unwrap();
    assert_eq!(order.amount(), dec!(0.03));
}

#[test]
fn test_order_zero_quantity_rejected() {
    assert_eq!(
        OrderRecord::new(day(), "Etiket", 0, dec!(1)),
        Err(OrderError::ZeroQuantity)
    );
}

#[test]
fn test_order_non_positive_price_rejected() {
    assert_eq!(
        OrderRecord::new(day(), "Etiket", 1, Decimal::ZERO),
        Err(OrderError::NonPositivePrice(Decimal::ZERO))
    );
    assert!(OrderRecord::new(day(), "Etiket", 1, dec!(-5)).is_err());
}

#[test]
fn test_order_amount_overflow_rejected() {
    let price = dec!(999999999999999999999999999);
    assert_eq!(
        OrderRecord::new(day(), "Ambalaj", 100, price),
        Err(OrderError::AmountOverflow {
            quantity: 100,
            unit_price: price,
        })
    );
    assert!(OrderRecord::new(day(), "Ambalaj", 1, dec!(50000000000000000000000000000)).is_err());
}

#[test]
fn test_order_amount_capped_at_max() {
    let at_max = OrderRecord::new(day(), "Ambalaj", 1, max_amount()).unwrap();
    assert_eq!(at_max.amount(), max_amount());
    assert!(matches!(
        OrderRecord::new(day(), "Ambalaj", 2, max_amount()),
        Err(OrderError::AmountOverflow { quantity: 2, .. })
    ));
}

// ── BudgetTable ───────────────────────────────────────────────

#[test]
fn test_default_budget_table() {
    let table = BudgetTable::default();
    assert_eq!(
        table.categories(),
        vec!["Ambalaj", "Kimyasal", "Hammadde", "Etiket"]
    );
    assert_eq!(table.find("Hammadde").unwrap().annual_budget, dec!(800000));
    assert_eq!(table.total_budget(), dec!(1700000));
}

#[test]
fn test_budget_table_keeps_order() {
    let table = BudgetTable::new(vec![
        BudgetEntry::new("Z", dec!(1)),
        BudgetEntry::new("A", dec!(2)),
    ])
    .unwrap();
    assert_eq!(table.categories(), vec!["Z", "A"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_budget_table_rejects_duplicates() {
    let err = BudgetTable::new(vec![
        BudgetEntry::new("Ambalaj", dec!(1)),
        BudgetEntry::new("Ambalaj", dec!(2)),
    ])
    .unwrap_err();
    assert_eq!(err, BudgetError::DuplicateCategory("Ambalaj".into()));
}

#[test]
fn test_budget_table_rejects_negative() {
    let err = BudgetTable::new(vec![BudgetEntry::new("Ambalaj", dec!(-1))]).unwrap_err();
    assert_eq!(err, BudgetError::NegativeBudget("Ambalaj".into(), dec!(-1)));
}

#[test]
fn test_budget_table_rejects_too_large() {
    let huge = max_amount() + Decimal::ONE;
    let err = BudgetTable::new(vec![BudgetEntry::new("Hammadde", huge)]).unwrap_err();
    assert_eq!(err, BudgetError::BudgetTooLarge("Hammadde".into(), huge));
}

#[test]
fn test_budget_table_allows_zero() {
    let table = BudgetTable::new(vec![BudgetEntry::new("Ambalaj", Decimal::ZERO)]).unwrap();
    assert_eq!(table.total_budget(), Decimal::ZERO);
}

#[test]
fn test_budget_table_rejects_blank_category() {
    let err = BudgetTable::new(vec![
        BudgetEntry::new("Ambalaj", dec!(1)),
        BudgetEntry::new("  ", dec!(1)),
    ])
    .unwrap_err();
    assert_eq!(err, BudgetError::EmptyCategory(2));
}

#[test]
fn test_find_by_name_case_insensitive() {
    let table = BudgetTable::default();
    assert_eq!(table.find_by_name("kimyasal").unwrap().category, "Kimyasal");
    assert!(table.find("kimyasal").is_none());
    assert!(table.find_by_name("Boya").is_none());
}

// ── SummaryRow ────────────────────────────────────────────────

#[test]
fn test_summary_row_over_budget() {
    let row = SummaryRow {
        category: "Etiket".into(),
        annual_budget: dec!(100),
        spent: dec!(150),
        remaining: dec!(-50),
        usage_pct: Some(dec!(150)),
    };
    assert!(row.is_over_budget());
}
