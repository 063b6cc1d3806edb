use log::info;
use rust_decimal::prelude::ToPrimitive;
use std::io::Read;
use std::path::Path;

use super::csv_table::{cell, parse_date, parse_decimal, CsvTable, ImportError};
use crate::models::OrderRecord;

const DATE_ALIASES: &[&str] = &["tarih", "date"];
const CATEGORY_ALIASES: &[&str] = &["kategori", "category"];
const QUANTITY_ALIASES: &[&str] = &["miktar", "quantity"];
const PRICE_ALIASES: &[&str] = &["birim fiyat", "unit price"];

pub(crate) struct OrderImporter;

impl OrderImporter {
    pub(crate) fn load(path: &Path) -> Result<Vec<OrderRecord>, ImportError> {
        let file = std::fs::File::open(path).map_err(csv::Error::from)?;
        let orders = Self::from_reader(file)?;
        info!("read {} orders from {}", orders.len(), path.display());
        Ok(orders)
    }

    /// Parse order rows. Any `Tutar`/`Amount` column is ignored; the amount
    /// is always recomputed from quantity and unit price.
    pub(crate) fn from_reader<R: Read>(reader: R) -> Result<Vec<OrderRecord>, ImportError> {
        let csv = CsvTable::read(reader)?;
        let date_col = csv.column("Tarih", DATE_ALIASES)?;
        let category_col = csv.column("Kategori", CATEGORY_ALIASES)?;
        let quantity_col = csv.column("Miktar", QUANTITY_ALIASES)?;
        let price_col = csv.column("Birim Fiyat", PRICE_ALIASES)?;

        let mut orders = Vec::with_capacity(csv.rows.len());
        for (i, row) in csv.rows.iter().enumerate() {
            let row_no = i + 1;

            let raw_date = cell(row, date_col);
            let date = parse_date(raw_date).ok_or_else(|| ImportError::InvalidDate {
                row: row_no,
                value: raw_date.to_string(),
            })?;

            let raw_qty = cell(row, quantity_col);
            let quantity = parse_quantity(raw_qty).ok_or_else(|| ImportError::InvalidQuantity {
                row: row_no,
                value: raw_qty.to_string(),
            })?;

            let raw_price = cell(row, price_col);
            let unit_price = parse_decimal(raw_price).ok_or_else(|| ImportError::InvalidNumber {
                row: row_no,
                value: raw_price.to_string(),
            })?;

            let order = OrderRecord::new(date, cell(row, category_col), quantity, unit_price)
                .map_err(|source| ImportError::Order {
                    row: row_no,
                    source,
                })?;
            orders.push(order);
        }

        Ok(orders)
    }
}

/// Whole-number quantity. Spreadsheet exports often write `100` as `100.0`.
pub(crate) fn parse_quantity(s: &str) -> Option<u32> {
    let value = parse_decimal(s)?;
    if !value.fract().is_zero() {
        return None;
    }
    value.to_u32()
}

#[cfg(test)]
#[path = "orders_csv_tests.rs"]
mod tests;
