use rust_decimal::Decimal;

/// One line of the spend-vs-budget summary. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub category: String,
    pub annual_budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// `None` when the annual budget is zero.
    pub usage_pct: Option<Decimal>,
}

impl SummaryRow {
    pub fn is_over_budget(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryTotals {
    pub annual_budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub usage_pct: Option<Decimal>,
}
