use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::{OrderRecord, SummaryRow};

const SUMMARY_HEADER: [&str; 5] = ["Kategori", "Yıllık Bütçe", "Harcanan", "Kalan", "Kullanım %"];
const ORDERS_HEADER: [&str; 5] = ["Tarih", "Kategori", "Miktar", "Birim Fiyat", "Tutar"];

/// Write summary rows as CSV. A zero-budget row has an empty usage cell.
pub(crate) fn write_summary<W: Write>(rows: &[SummaryRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SUMMARY_HEADER)?;
    for row in rows {
        wtr.write_record([
            row.category.clone(),
            row.annual_budget.to_string(),
            row.spent.to_string(),
            row.remaining.to_string(),
            row.usage_pct.map(|p| p.to_string()).unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub(crate) fn write_orders<W: Write>(orders: &[OrderRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(ORDERS_HEADER)?;
    for order in orders {
        wtr.write_record([
            order.date().format("%Y-%m-%d").to_string(),
            order.category().to_string(),
            order.quantity().to_string(),
            order.unit_price().to_string(),
            order.amount().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub(crate) fn summary_to_path(rows: &[SummaryRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_summary(rows, file)
}

pub(crate) fn orders_to_path(orders: &[OrderRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_orders(orders, file)
}
