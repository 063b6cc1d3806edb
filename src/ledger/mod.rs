use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use crate::models::{BudgetTable, OrderRecord};

/// Append-only list of the orders submitted during a session.
#[derive(Debug, Clone, Default)]
pub(crate) struct Ledger {
    orders: Vec<OrderRecord>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, record: OrderRecord) {
        debug!(
            "ledger append: {} {} x {} = {}",
            record.category(),
            record.quantity(),
            record.unit_price(),
            record.amount()
        );
        self.orders.push(record);
    }

    /// Orders in submission order. The borrow keeps the ledger frozen for as
    /// long as the slice is held.
    pub(crate) fn all(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Owned copy of the current orders.
    pub(crate) fn snapshot(&self) -> Vec<OrderRecord> {
        self.orders.clone()
    }

    /// Sum of order amounts per category. Categories without orders are absent.
    pub(crate) fn spent_by_category(&self) -> BTreeMap<String, Decimal> {
        let mut spent: BTreeMap<String, Decimal> = BTreeMap::new();
        for order in &self.orders {
            *spent.entry(order.category().to_string()).or_default() += order.amount();
        }
        spent
    }

    pub(crate) fn total_spent(&self) -> Decimal {
        self.orders.iter().map(|o| o.amount()).sum()
    }

    /// Categories with recorded spend that have no row in `budget`.
    pub(crate) fn categories_outside(&self, budget: &BudgetTable) -> Vec<String> {
        self.spent_by_category()
            .into_keys()
            .filter(|c| budget.find(c).is_none())
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.orders.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
