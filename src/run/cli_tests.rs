#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{BudgetTable, OrderRecord};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_flag_value() {
    let a = args(&["spendtui", "summary", "--orders", "o.csv", "--budget", "b.csv"]);
    assert_eq!(flag_value(&a, "--orders"), Some("o.csv"));
    assert_eq!(flag_value(&a, "--budget"), Some("b.csv"));
    assert_eq!(flag_value(&a, "--csv"), None);
}

#[test]
fn test_flag_without_value() {
    let a = args(&["spendtui", "summary", "--orders"]);
    assert_eq!(flag_value(&a, "--orders"), None);
}

#[test]
fn test_usage_bar() {
    assert_eq!(usage_bar(Some(dec!(0)), 4), "[░░░░]");
    assert_eq!(usage_bar(Some(dec!(50)), 4), "[██░░]");
    assert_eq!(usage_bar(Some(dec!(180)), 4), "[████]");
    assert_eq!(usage_bar(None, 4), "");
}

#[test]
fn test_summary_report_rows_and_totals() {
    let mut session = Session::new(BudgetTable::default());
    let date = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
    session.submit(OrderRecord::new(date, "Ambalaj", 100, dec!(10)).unwrap());

    let lines = summary_report(&session);
    // rule, header, rule, 4 categories, rule, total
    assert_eq!(lines.len(), 9);
    assert!(lines[3].contains("Ambalaj"));
    assert!(lines[3].contains("299,000.00 ₺"));
    assert!(lines[3].contains("0.33%"));
    assert!(lines[8].contains("Toplam"));
    assert!(lines[8].contains("1,700,000.00 ₺"));
}

#[test]
fn test_unknown_command_errors() {
    let err = as_cli(&args(&["spendtui", "frobnicate"])).unwrap_err();
    assert!(err.to_string().contains("frobnicate"));
}

#[test]
fn test_command_position_bare_invocation() {
    assert_eq!(command_position(&args(&["spendtui"])), None);
    assert_eq!(command_position(&args(&["spendtui", "--budget", "b.csv"])), None);
}

#[test]
fn test_command_position_after_budget_flag() {
    let a = args(&["spendtui", "--budget", "b.csv", "summary"]);
    assert_eq!(command_position(&a), Some(3));
    assert_eq!(flag_value(&a, "--budget"), Some("b.csv"));
}

#[test]
fn test_command_position_before_options() {
    let a = args(&["spendtui", "summary", "--orders", "o.csv", "--csv"]);
    assert_eq!(command_position(&a), Some(1));
    assert_eq!(command_position(&args(&["spendtui", "--csv", "budget"])), Some(2));
}

#[test]
fn test_command_position_help_and_version() {
    assert_eq!(command_position(&args(&["spendtui", "--help"])), Some(1));
    assert_eq!(command_position(&args(&["spendtui", "-V"])), Some(1));
}

#[test]
fn test_unbudgeted_warning() {
    let mut session = Session::new(BudgetTable::default());
    let date = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
    session.submit(OrderRecord::new(date, "Ambalaj", 1, dec!(1)).unwrap());
    assert_eq!(unbudgeted_warning(&session), None);

    session.submit(OrderRecord::new(date, "Boya", 1, dec!(1)).unwrap());
    let warning = unbudgeted_warning(&session).unwrap();
    assert!(warning.contains("Boya"));
}
