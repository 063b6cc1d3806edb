use log::{debug, warn};
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::models::{BudgetTable, SummaryRow, SummaryTotals};

const PCT_DECIMALS: u32 = 2;

/// Merge per-category spend from `ledger` onto `budget`.
///
/// Produces exactly one row per budget entry, in table order. Spend recorded
/// under a category that has no budget entry does not appear in the output.
pub(crate) fn summarize(budget: &BudgetTable, ledger: &Ledger) -> Vec<SummaryRow> {
    let spent_map = ledger.spent_by_category();

    let dropped: Vec<&String> = spent_map
        .keys()
        .filter(|c| budget.find(c).is_none())
        .collect();
    if !dropped.is_empty() {
        warn!("spend outside the budget table is not summarized: {dropped:?}");
    }

    let rows: Vec<SummaryRow> = budget
        .entries()
        .iter()
        .map(|entry| {
            let spent = spent_map
                .get(&entry.category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            SummaryRow {
                category: entry.category.clone(),
                annual_budget: entry.annual_budget,
                spent,
                remaining: entry.annual_budget - spent,
                usage_pct: usage_pct(spent, entry.annual_budget),
            }
        })
        .collect();

    debug!("summarized {} orders into {} rows", ledger.len(), rows.len());
    rows
}

pub(crate) fn totals(rows: &[SummaryRow]) -> SummaryTotals {
    let annual_budget: Decimal = rows.iter().map(|r| r.annual_budget).sum();
    let spent: Decimal = rows.iter().map(|r| r.spent).sum();
    SummaryTotals {
        annual_budget,
        spent,
        remaining: annual_budget - spent,
        usage_pct: usage_pct(spent, annual_budget),
    }
}

/// Percent of `budget` consumed by `spent`, rounded half-to-even to two
/// places. Undefined for a zero budget.
pub(crate) fn usage_pct(spent: Decimal, budget: Decimal) -> Option<Decimal> {
    if budget.is_zero() {
        return None;
    }
    let pct = spent.checked_mul(Decimal::ONE_HUNDRED)?.checked_div(budget)?;
    Some(pct.round_dp(PCT_DECIMALS))
}
