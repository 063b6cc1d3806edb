mod budget;
mod order;
mod summary;

pub use budget::{BudgetEntry, BudgetError, BudgetTable};
pub use order::{OrderError, OrderRecord};
pub use summary::{SummaryRow, SummaryTotals};

use rust_decimal::Decimal;

/// Largest order amount or annual budget accepted, 10^15 ₺. Keeps every
/// ledger and summary sum far inside `Decimal`'s range.
pub fn max_amount() -> Decimal {
    Decimal::from(1_000_000_000_000_000_i64)
}

#[cfg(test)]
mod tests;
