use anyhow::{Context, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::{shellexpand, BudgetSource};
use crate::import::OrderImporter;
use crate::session::Session;
use crate::ui::util::{format_amount, format_pct, truncate};

/// Options that consume the argument after them.
const VALUE_FLAGS: &[&str] = &["--budget", "--orders"];

/// Index of the subcommand in `args`, skipping options and their values.
/// `None` means a bare invocation, which starts the TUI.
pub(crate) fn command_position(args: &[String]) -> Option<usize> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if VALUE_FLAGS.contains(&arg) {
            i += 2;
        } else if arg.starts_with("--") && !matches!(arg, "--help" | "--version") {
            i += 1;
        } else {
            return Some(i);
        }
    }
    None
}

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    let Some(pos) = command_position(args) else {
        print_usage();
        anyhow::bail!("No command given");
    };
    match args[pos].as_str() {
        "summary" | "s" => cli_summary(args),
        "budget" | "b" => cli_budget(args),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTUI — purchase-order budget tracker");
    println!();
    println!("Usage: spendtui [--budget <file.csv>] [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print spend-vs-budget summary");
    println!("    --orders <file.csv>         Orders to summarize (Tarih,Kategori,Miktar,Birim Fiyat)");
    println!("    --csv                       Print the summary as CSV");
    println!("  budget                        Print the budget table");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --budget <file.csv>           Budget table (Kategori,Yıllık Bütçe)");
    println!("                                default: $SPENDTUI_BUDGET, then budget.csv");
    println!("                                in the config dir, then built-in categories");
}

/// Value following `flag`, e.g. `--budget x.csv` → `x.csv`.
pub(crate) fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Build a session from `--budget` (or the configured fallback).
pub(crate) fn open_session(args: &[String]) -> Result<(Session, BudgetSource)> {
    let source = BudgetSource::resolve(flag_value(args, "--budget"));
    let budget = source.load()?;
    Ok((Session::new(budget), source))
}

fn cli_summary(args: &[String]) -> Result<()> {
    let (mut session, source) = open_session(args)?;

    if let Some(orders_path) = flag_value(args, "--orders") {
        let path = PathBuf::from(shellexpand(orders_path));
        let orders = OrderImporter::load(&path)
            .with_context(|| format!("Failed to load orders from {}", path.display()))?;
        session.submit_all(orders);
    }

    if let Some(warning) = unbudgeted_warning(&session) {
        eprintln!("{warning}");
    }

    if args.iter().any(|a| a == "--csv") {
        return crate::export::write_summary(&session.summary(), std::io::stdout().lock());
    }

    println!(
        "SpendTUI — Bütçe Özeti ({}, {} orders)",
        source,
        session.ledger().len()
    );
    for line in summary_report(&session) {
        println!("{line}");
    }
    Ok(())
}

fn unbudgeted_warning(session: &Session) -> Option<String> {
    let dropped = session.unbudgeted_categories();
    if dropped.is_empty() {
        return None;
    }
    Some(format!(
        "Warning: spend in categories without a budget row is not summarized: {}",
        dropped.join(", ")
    ))
}

fn cli_budget(args: &[String]) -> Result<()> {
    let (session, source) = open_session(args)?;
    let budget = session.budget();

    println!("Yıllık Bütçe ({source})");
    println!("{}", "─".repeat(44));
    for entry in budget.entries() {
        println!(
            "  {:<24} {:>16}",
            truncate(&entry.category, 24),
            format_amount(entry.annual_budget)
        );
    }
    println!("{}", "─".repeat(44));
    println!("  {:<24} {:>16}", "Toplam", format_amount(budget.total_budget()));
    Ok(())
}

pub(crate) fn summary_report(session: &Session) -> Vec<String> {
    let rows = session.summary();
    let totals = session.totals();
    let rule = "─".repeat(96);

    let mut lines = vec![
        rule.clone(),
        format!(
            "  {:<20} {:>16} {:>16} {:>16} {:>10}  ",
            "Kategori", "Yıllık Bütçe", "Harcanan", "Kalan", "Kullanım %"
        ),
        rule.clone(),
    ];
    for row in &rows {
        lines.push(format!(
            "  {:<20} {:>16} {:>16} {:>16} {:>10}  {}",
            truncate(&row.category, 20),
            format_amount(row.annual_budget),
            format_amount(row.spent),
            format_amount(row.remaining),
            format_pct(row.usage_pct),
            usage_bar(row.usage_pct, 10),
        ));
    }
    lines.push(rule);
    lines.push(format!(
        "  {:<20} {:>16} {:>16} {:>16} {:>10}",
        "Toplam",
        format_amount(totals.annual_budget),
        format_amount(totals.spent),
        format_amount(totals.remaining),
        format_pct(totals.usage_pct),
    ));
    lines
}

/// Text bar for a usage percentage, capped at a full bar.
pub(crate) fn usage_bar(pct: Option<Decimal>, width: usize) -> String {
    let Some(pct) = pct else {
        return String::new();
    };
    let ratio = (pct.to_f64().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
