#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::models::BudgetTable;

fn app() -> App {
    App::new(Session::new(BudgetTable::default()), BudgetSource::Default)
}

#[test]
fn test_new_app_starts_on_orders() {
    let app = app();
    assert!(app.running);
    assert_eq!(app.screen, Screen::Orders);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.session.ledger().is_empty());
}

#[test]
fn test_submit_form_appends_and_reports() {
    let mut app = app();
    app.open_form();
    assert_eq!(app.input_mode, InputMode::Form);

    app.submit_form();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.session.ledger().len(), 1);
    assert_eq!(
        app.status_message,
        "Ambalaj için 1,000.00 ₺ tutarında sipariş eklendi."
    );
}

#[test]
fn test_invalid_form_stays_open() {
    let mut app = app();
    app.open_form();
    app.form.quantity = "0".into();
    app.submit_form();
    assert_eq!(app.input_mode, InputMode::Form);
    assert!(app.session.ledger().is_empty());
    assert!(app.status_message.contains("Quantity"));
}

#[test]
fn test_unbudgeted_order_warns() {
    let mut app = app();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    app.record_order(OrderRecord::new(date, "Boya", 1, dec!(5)).unwrap());
    assert!(app.status_message.contains("bütçede yok"));
}

#[test]
fn test_selection_follows_new_orders() {
    let mut app = app();
    app.visible_rows = 2;
    for _ in 0..3 {
        app.open_form();
        app.submit_form();
    }
    assert_eq!(app.order_index, 2);
    assert_eq!(app.order_scroll, 1);
}
