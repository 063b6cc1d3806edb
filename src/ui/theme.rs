use ratatui::style::{Color, Modifier, Style};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub(crate) const HEADER_BG: Color = Color::Rgb(30, 30, 46);
pub(crate) const HEADER_FG: Color = Color::Rgb(205, 214, 244);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);
pub(crate) const COMMAND_BG: Color = Color::Rgb(24, 24, 37);

// Diverging usage scale: low usage green, half yellow, full budget red.
const SCALE_LOW: (u8, u8, u8) = (26, 152, 80);
const SCALE_MID: (u8, u8, u8) = (255, 255, 191);
const SCALE_HIGH: (u8, u8, u8) = (215, 48, 39);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(TEXT_DIM)
        .add_modifier(Modifier::BOLD)
}

/// Colour for a usage percentage on the diverging scale. Values are
/// clamped to 0..=100; undefined usage is dimmed.
pub(crate) fn usage_color(pct: Option<Decimal>) -> Color {
    let Some(pct) = pct else {
        return TEXT_DIM;
    };
    let t = (pct.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        (SCALE_LOW, SCALE_MID, t * 2.0)
    } else {
        (SCALE_MID, SCALE_HIGH, (t - 0.5) * 2.0)
    };
    Color::Rgb(
        lerp(from.0, to.0, local),
        lerp(from.1, to.1, local),
        lerp(from.2, to.2, local),
    )
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}
