mod budget_csv;
mod csv_table;
mod orders_csv;

pub(crate) use budget_csv::BudgetImporter;
pub(crate) use csv_table::parse_date;
pub(crate) use orders_csv::{parse_quantity, OrderImporter};
