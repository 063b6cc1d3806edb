use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::SummaryRow;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_pct, truncate};

// Bars are drawn in hundredths of a percent so 0.33% still registers.
const FULL_BUDGET_BAR: u64 = 100 * 100;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    // Recomputed on every draw from the current ledger.
    let rows = app.session.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),                     // Totals
            Constraint::Length(rows.len() as u16 + 3), // Summary table
            Constraint::Min(8),                        // Usage chart
        ])
        .split(area);

    render_totals(f, chunks[0], app);
    render_table(f, chunks[1], app, &rows);
    render_usage_chart(f, chunks[2], &rows);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let totals = app.session.totals();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Yıllık Bütçe",
        format_amount(totals.annual_budget),
        theme::ACCENT,
    );
    render_card(
        f,
        cards[1],
        "Harcanan",
        format_amount(totals.spent),
        theme::YELLOW,
    );
    render_card(
        f,
        cards[2],
        "Kalan",
        format_amount(totals.remaining),
        if totals.remaining >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
    );
    render_card(
        f,
        cards[3],
        "Kullanım",
        format_pct(totals.usage_pct),
        theme::usage_color(totals.usage_pct),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App, rows: &[SummaryRow]) {
    let header_cells = ["Kategori", "Yıllık Bütçe", "Harcanan", "Kalan", "Kullanım %"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i == app.row_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let remaining_style = if row.is_over_budget() {
                Style::default().fg(theme::RED)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(truncate(&row.category, 20)),
                Cell::from(format_amount(row.annual_budget)),
                Cell::from(format_amount(row.spent)),
                Cell::from(Span::styled(format_amount(row.remaining), remaining_style)),
                Cell::from(Span::styled(
                    format_pct(row.usage_pct),
                    Style::default().fg(theme::usage_color(row.usage_pct)),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(12),
    ];

    let table = Table::new(table_rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Bütçe Özeti ", theme::title_style())),
    );
    f.render_widget(table, area);
}

fn render_usage_chart(f: &mut Frame, area: Rect, rows: &[SummaryRow]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Kategori Bazlı Bütçe Kullanımı (%) ",
            theme::title_style(),
        ));

    if rows.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "The budget table has no categories",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            let color = theme::usage_color(row.usage_pct);
            Bar::default()
                .value(bar_value(row.usage_pct))
                .text_value(format_pct(row.usage_pct))
                .label(Line::from(truncate(&row.category, 12)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max = bars_max(rows);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2)
        .max(max);

    f.render_widget(chart, area);
}

/// Bar height in hundredths of a percent. Undefined or negative usage draws
/// nothing; usage too large for the chart draws a full-height bar.
fn bar_value(pct: Option<Decimal>) -> u64 {
    let Some(pct) = pct else {
        return 0;
    };
    match pct.checked_mul(Decimal::ONE_HUNDRED) {
        Some(v) if v <= Decimal::ZERO => 0,
        Some(v) => v.round().to_u64().unwrap_or(u64::MAX),
        None => u64::MAX,
    }
}

/// Chart ceiling: a full budget, or higher when a category is over.
fn bars_max(rows: &[SummaryRow]) -> u64 {
    rows.iter()
        .map(|r| bar_value(r.usage_pct))
        .max()
        .unwrap_or(0)
        .max(FULL_BUDGET_BAR)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
