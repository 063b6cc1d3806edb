#![allow(clippy::unwrap_used)]

use ratatui::style::Color;
use rust_decimal_macros::dec;

use super::theme::usage_color;
use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Ambalaj", 10), "Ambalaj");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Hammadde", 5), "Hamm…");
}

#[test]
fn test_truncate_turkish_characters() {
    assert_eq!(truncate("Yıllık Bütçe", 7), "Yıllık…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Etiket", 0), "");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "1,234.56 ₺");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "0.00 ₺");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-42.50 ₺");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(300000)), "300,000.00 ₺");
}

// ── format_pct ────────────────────────────────────────────────

#[test]
fn test_format_pct() {
    assert_eq!(format_pct(Some(dec!(0.33))), "0.33%");
    assert_eq!(format_pct(Some(dec!(150))), "150.00%");
    assert_eq!(format_pct(None), "—");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (3, 1));
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (4, 2);
    scroll_down(&mut index, &mut scroll, 5, 3);
    assert_eq!((index, scroll), (4, 2));
}

#[test]
fn test_scroll_up_follows_cursor() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

// ── usage_color ───────────────────────────────────────────────

#[test]
fn test_usage_color_endpoints() {
    assert_eq!(usage_color(Some(dec!(0))), Color::Rgb(26, 152, 80));
    assert_eq!(usage_color(Some(dec!(50))), Color::Rgb(255, 255, 191));
    assert_eq!(usage_color(Some(dec!(100))), Color::Rgb(215, 48, 39));
}

#[test]
fn test_usage_color_clamps() {
    assert_eq!(usage_color(Some(dec!(250))), usage_color(Some(dec!(100))));
    assert_eq!(usage_color(Some(dec!(-5))), usage_color(Some(dec!(0))));
}

#[test]
fn test_usage_color_undefined() {
    assert_eq!(usage_color(None), super::theme::TEXT_DIM);
}
