use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::form::FormField;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.input_mode == InputMode::Form {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(40)])
            .split(area);
        render_orders(f, chunks[0], app);
        render_form(f, chunks[1], app);
    } else {
        render_orders(f, area, app);
    }
}

fn orders_block(app: &App) -> Block<'static> {
    let ledger = app.session.ledger();
    let title = format!(
        " Siparişler ({}) · Toplam {} ",
        ledger.len(),
        format_amount(ledger.total_spent())
    );
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()))
}

fn render_orders(f: &mut Frame, area: Rect, app: &App) {
    let orders = app.session.ledger().all();
    if orders.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No orders yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press n to open the order form, or :load-orders <file.csv>",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(orders_block(app)), area);
        return;
    }

    let header_cells = ["Tarih", "Kategori", "Miktar", "Birim Fiyat", "Tutar"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = orders
        .iter()
        .enumerate()
        .skip(app.order_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, order)| {
            let style = if i == app.order_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let category_style = if app.session.budget().find(order.category()).is_some() {
                Style::default()
            } else {
                Style::default().fg(theme::YELLOW)
            };

            Row::new(vec![
                Cell::from(order.date().format("%Y-%m-%d").to_string()),
                Cell::from(Span::styled(truncate(order.category(), 18), category_style)),
                Cell::from(order.quantity().to_string()),
                Cell::from(format_amount(order.unit_price())),
                Cell::from(format_amount(order.amount())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(18),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(orders_block(app));
    f.render_widget(table, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let budget = app.session.budget();

    let mut lines = vec![Line::from("")];
    for field in FormField::all() {
        let value = match field {
            FormField::Category => format!(
                "< {} >",
                form.selected_category(budget).unwrap_or("—")
            ),
            FormField::Date => form.date.clone(),
            FormField::Quantity => form.quantity.clone(),
            FormField::UnitPrice => form.unit_price.clone(),
        };
        let focused = *field == form.field;
        let value_style = if focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        };

        lines.push(Line::from(Span::styled(
            format!(" {}", field.label()),
            theme::dim_style(),
        )));
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {value} "), value_style),
        ]));
        lines.push(Line::from(""));
    }

    let preview = form
        .build(budget)
        .map(|order| format!(" Tutar: {}", format_amount(order.amount())))
        .unwrap_or_else(|_| " Tutar: —".into());
    lines.push(Line::from(Span::styled(
        preview,
        Style::default()
            .fg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(Span::styled(" Yeni Sipariş Girişi ", theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
