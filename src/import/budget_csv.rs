use log::info;
use std::io::Read;
use std::path::Path;

use super::csv_table::{cell, parse_decimal, CsvTable, ImportError};
use crate::models::{BudgetEntry, BudgetTable};

const CATEGORY_COLUMN: &str = "Kategori";
const BUDGET_COLUMN: &str = "Yıllık Bütçe";

const CATEGORY_ALIASES: &[&str] = &["kategori", "category"];
const BUDGET_ALIASES: &[&str] = &["yıllık bütçe", "annual budget", "budget"];

pub(crate) struct BudgetImporter;

impl BudgetImporter {
    pub(crate) fn load(path: &Path) -> Result<BudgetTable, ImportError> {
        let file = std::fs::File::open(path).map_err(csv::Error::from)?;
        let table = Self::from_reader(file)?;
        info!(
            "loaded {} budget categories from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Read a budget table from CSV with `Kategori` and `Yıllık Bütçe`
    /// columns. Other columns are ignored.
    pub(crate) fn from_reader<R: Read>(reader: R) -> Result<BudgetTable, ImportError> {
        let csv = CsvTable::read(reader)?;
        let category_col = csv.column(CATEGORY_COLUMN, CATEGORY_ALIASES)?;
        let budget_col = csv.column(BUDGET_COLUMN, BUDGET_ALIASES)?;

        if csv.rows.is_empty() {
            return Err(ImportError::Empty);
        }

        let mut entries = Vec::with_capacity(csv.rows.len());
        for (i, row) in csv.rows.iter().enumerate() {
            let raw = cell(row, budget_col);
            let annual_budget = parse_decimal(raw).ok_or_else(|| ImportError::InvalidNumber {
                row: i + 1,
                value: raw.to_string(),
            })?;
            entries.push(BudgetEntry::new(cell(row, category_col), annual_budget));
        }

        Ok(BudgetTable::new(entries)?)
    }
}

#[cfg(test)]
#[path = "budget_csv_tests.rs"]
mod tests;
