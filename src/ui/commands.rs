use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, Screen};
use super::form::min_unit_price;
use crate::config::{default_export_path, shellexpand};
use crate::import::{parse_date, parse_quantity, OrderImporter};
use crate::models::OrderRecord;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("o", "Go to Orders", cmd_orders, r);
    register_command!("orders", "Go to Orders", cmd_orders, r);
    register_command!("s", "Go to Summary", cmd_summary, r);
    register_command!("summary", "Go to Summary", cmd_summary, r);
    register_command!("b", "Go to Budget table", cmd_budget, r);
    register_command!("budget", "Go to Budget table", cmd_budget, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("n", "Open the new-order form", cmd_new, r);
    register_command!("new", "Open the new-order form", cmd_new, r);
    register_command!(
        "order",
        "Add order (e.g. :order Ambalaj 100 10.00 [2024-01-15])",
        cmd_order,
        r
    );
    register_command!(
        "export",
        "Export summary to CSV (e.g. :export ~/ozet.csv)",
        cmd_export,
        r
    );
    register_command!(
        "export-orders",
        "Export orders to CSV (e.g. :export-orders ~/siparis.csv)",
        cmd_export_orders,
        r
    );
    register_command!(
        "load-orders",
        "Append orders from CSV (e.g. :load-orders ~/siparis.csv)",
        cmd_load_orders,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_orders(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Orders;
    Ok(())
}

fn cmd_summary(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Summary;
    app.row_index = 0;
    let dropped = app.session.unbudgeted_categories();
    if !dropped.is_empty() {
        app.set_status(format!(
            "Not in summary (no budget row): {}",
            dropped.join(", ")
        ));
    }
    Ok(())
}

fn cmd_budget(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    app.row_index = 0;
    app.set_status(format!("Budget table: {}", app.budget_source));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_new(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.open_form();
    Ok(())
}

fn cmd_order(args: &str, app: &mut App) -> anyhow::Result<()> {
    const USAGE: &str = "Usage: :order <category> <quantity> <unit price> [date]";

    let mut tokens: Vec<&str> = args.split_whitespace().collect();
    let date = match tokens.last().and_then(|t| parse_date(t)) {
        Some(d) => {
            tokens.pop();
            d
        }
        None => chrono::Local::now().date_naive(),
    };
    if tokens.len() < 3 {
        let categories = app.session.budget().categories().join(", ");
        app.set_status(format!("{USAGE} ({categories})"));
        return Ok(());
    }

    let price_str = tokens[tokens.len() - 1];
    let qty_str = tokens[tokens.len() - 2];
    let typed_category = tokens[..tokens.len() - 2].join(" ");

    let Some(quantity) = parse_quantity(qty_str).filter(|q| *q >= 1) else {
        app.set_status(format!("Invalid quantity: {qty_str}"));
        return Ok(());
    };
    let Ok(unit_price) = Decimal::from_str(price_str) else {
        app.set_status(format!("Invalid unit price: {price_str}"));
        return Ok(());
    };
    if unit_price < min_unit_price() {
        app.set_status(format!("Unit price must be at least 0.01: {price_str}"));
        return Ok(());
    }

    let category = app
        .session
        .budget()
        .find_by_name(&typed_category)
        .map(|e| e.category.clone())
        .unwrap_or(typed_category);

    match OrderRecord::new(date, category, quantity, unit_price) {
        Ok(order) => {
            app.record_order(order);
            app.screen = Screen::Orders;
        }
        Err(e) => app.set_status(format!("Order rejected: {e}")),
    }
    Ok(())
}

fn export_target(args: &str, kind: &str) -> PathBuf {
    if args.is_empty() {
        default_export_path(kind)
    } else {
        PathBuf::from(shellexpand(args))
    }
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = export_target(args, "summary");
    let rows = app.session.summary();
    match crate::export::summary_to_path(&rows, &path) {
        Ok(()) => app.set_status(format!(
            "Exported {} summary rows to {}",
            rows.len(),
            path.display()
        )),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_export_orders(args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.session.ledger().is_empty() {
        app.set_status("No orders to export");
        return Ok(());
    }
    let path = export_target(args, "orders");
    let orders = app.session.ledger().snapshot();
    match crate::export::orders_to_path(&orders, &path) {
        Ok(()) => app.set_status(format!(
            "Exported {} orders to {}",
            orders.len(),
            path.display()
        )),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_load_orders(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :load-orders <file.csv>");
        return Ok(());
    }
    let path = PathBuf::from(shellexpand(args));
    let orders = match OrderImporter::load(&path) {
        Ok(orders) => orders,
        Err(e) => {
            app.set_status(format!("Could not load {}: {e}", path.display()));
            return Ok(());
        }
    };

    let count = app.session.submit_all(orders);
    app.select_last_order();
    let dropped = app.session.unbudgeted_categories();
    if dropped.is_empty() {
        app.set_status(format!("Loaded {count} orders"));
    } else {
        app.set_status(format!(
            "Loaded {count} orders. Not in summary (no budget row): {}",
            dropped.join(", ")
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
