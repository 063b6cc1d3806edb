use log::{info, warn};

use crate::ledger::Ledger;
use crate::models::{BudgetTable, OrderRecord, SummaryRow, SummaryTotals};
use crate::summary;

/// Everything one user works on: a fixed budget table and the orders
/// logged against it. Created per run and passed explicitly to handlers.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    budget: BudgetTable,
    ledger: Ledger,
}

impl Session {
    pub(crate) fn new(budget: BudgetTable) -> Self {
        info!("session started with {} budget categories", budget.len());
        Self {
            budget,
            ledger: Ledger::new(),
        }
    }

    pub(crate) fn budget(&self) -> &BudgetTable {
        &self.budget
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Record an order. Returns `true` when its category has a budget row;
    /// spend in other categories is kept but left out of the summary.
    pub(crate) fn submit(&mut self, order: OrderRecord) -> bool {
        let budgeted = self.budget.find(order.category()).is_some();
        if !budgeted {
            warn!(
                "order in '{}' has no budget row and will not be summarized",
                order.category()
            );
        }
        self.ledger.append(order);
        budgeted
    }

    pub(crate) fn submit_all(&mut self, orders: impl IntoIterator<Item = OrderRecord>) -> usize {
        let mut count = 0;
        for order in orders {
            self.submit(order);
            count += 1;
        }
        count
    }

    pub(crate) fn summary(&self) -> Vec<SummaryRow> {
        summary::summarize(&self.budget, &self.ledger)
    }

    pub(crate) fn totals(&self) -> SummaryTotals {
        summary::totals(&self.summary())
    }

    /// Categories with spend that the summary leaves out.
    pub(crate) fn unbudgeted_categories(&self) -> Vec<String> {
        self.ledger.categories_outside(&self.budget)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
