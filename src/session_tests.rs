#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::max_amount;

fn order(category: &str, quantity: u32, price: Decimal) -> OrderRecord {
    let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    OrderRecord::new(date, category, quantity, price).unwrap()
}

#[test]
fn test_new_session_has_empty_ledger() {
    let session = Session::new(BudgetTable::default());
    assert!(session.ledger().is_empty());
    assert_eq!(session.summary().len(), 4);
    assert_eq!(session.totals().spent, Decimal::ZERO);
}

#[test]
fn test_submit_recomputes_summary() {
    let mut session = Session::new(BudgetTable::default());
    assert!(session.submit(order("Ambalaj", 100, dec!(10.00))));

    let ambalaj = session
        .summary()
        .into_iter()
        .find(|r| r.category == "Ambalaj")
        .unwrap();
    assert_eq!(ambalaj.spent, dec!(1000));
    assert_eq!(ambalaj.usage_pct, Some(dec!(0.33)));
}

#[test]
fn test_submit_unbudgeted_category() {
    let mut session = Session::new(BudgetTable::default());
    assert!(!session.submit(order("Boya", 1, dec!(10))));

    assert_eq!(session.ledger().len(), 1);
    assert_eq!(session.unbudgeted_categories(), vec!["Boya".to_string()]);
    assert_eq!(session.totals().spent, Decimal::ZERO);
}

#[test]
fn test_submit_all_counts_orders() {
    let mut session = Session::new(BudgetTable::default());
    let n = session.submit_all(vec![
        order("Kimyasal", 10, dec!(5)),
        order("Kimyasal", 20, dec!(5)),
    ]);
    assert_eq!(n, 2);
    assert_eq!(session.totals().spent, dec!(150));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Session::new(BudgetTable::default());
    let second = Session::new(BudgetTable::default());
    first.submit(order("Etiket", 1, dec!(1)));

    assert_eq!(first.ledger().len(), 1);
    assert!(second.ledger().is_empty());
}

#[test]
fn test_summary_of_largest_orders() {
    let mut session = Session::new(BudgetTable::default());
    for _ in 0..1000 {
        session.submit(order("Ambalaj", 1, max_amount()));
    }
    let totals = session.totals();
    assert_eq!(totals.spent, max_amount() * Decimal::from(1000));
    assert!(totals.remaining < Decimal::ZERO);
    assert!(totals.usage_pct.is_some());
}
