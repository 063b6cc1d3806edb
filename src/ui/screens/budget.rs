use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let budget = app.session.budget();
    let title = format!(" Yıllık Bütçe: {} ", app.budget_source);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()));

    if budget.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No budget categories", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Start with --budget <file.csv> (columns: Kategori, Yıllık Bütçe)",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let header_cells = ["Kategori", "Yıllık Bütçe"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let mut rows: Vec<Row> = budget
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == app.row_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(truncate(&entry.category, 30)),
                Cell::from(format_amount(entry.annual_budget)),
            ])
            .style(style)
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from("Toplam"),
            Cell::from(format_amount(budget.total_budget())),
        ])
        .style(theme::header_style()),
    );

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(20)])
        .header(header)
        .block(block);
    f.render_widget(table, area);
}
