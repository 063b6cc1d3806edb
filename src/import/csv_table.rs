use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{BudgetError, OrderError};

/// Date formats accepted for order dates, tried in order.
pub(crate) const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

#[derive(Error, Debug)]
pub(crate) enum ImportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("file has no data rows")]
    Empty,
    #[error("row {row}: '{value}' is not a valid number")]
    InvalidNumber { row: usize, value: String },
    #[error("row {row}: '{value}' is not a valid quantity")]
    InvalidQuantity { row: usize, value: String },
    #[error("row {row}: '{value}' is not a valid date")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: {source}")]
    Order { row: usize, source: OrderError },
    #[error(transparent)]
    Budget(#[from] BudgetError),
}

/// A CSV file read fully into memory with its header row split off.
pub(super) struct CsvTable {
    headers: Vec<String>,
    pub(super) rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub(super) fn read<R: Read>(reader: R) -> Result<Self, ImportError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Index of the first header matching any of `aliases`.
    pub(super) fn column(
        &self,
        name: &'static str,
        aliases: &[&str],
    ) -> Result<usize, ImportError> {
        self.optional_column(aliases)
            .ok_or(ImportError::MissingColumn(name))
    }

    pub(super) fn optional_column(&self, aliases: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| aliases.iter().any(|a| h == a))
    }
}

/// Cell accessor tolerant of short rows.
pub(super) fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.as_str()).unwrap_or("")
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Parse a money-like cell: currency symbols and thousands separators are
/// stripped, `(x)` means negative, blank means zero.
pub(crate) fn parse_decimal(s: &str) -> Option<Decimal> {
    let cleaned = s
        .replace(['₺', '$', ',', '"'], "")
        .replace("TL", "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).ok()
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

#[cfg(test)]
#[path = "csv_table_tests.rs"]
mod tests;
