use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BudgetError {
    #[error("category '{0}' appears more than once in the budget table")]
    DuplicateCategory(String),
    #[error("annual budget for '{0}' is negative ({1})")]
    NegativeBudget(String, Decimal),
    #[error("budget table row {0} has an empty category")]
    EmptyCategory(usize),
    #[error("annual budget for '{0}' is too large ({1})")]
    BudgetTooLarge(String, Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEntry {
    pub category: String,
    pub annual_budget: Decimal,
}

impl BudgetEntry {
    pub fn new(category: impl Into<String>, annual_budget: Decimal) -> Self {
        Self {
            category: category.into(),
            annual_budget,
        }
    }
}

/// Per-category annual budgets, kept in the order they were loaded.
///
/// Categories are unique and budgets lie in `0..=max_amount()`. A table is
/// built once per session and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetTable {
    entries: Vec<BudgetEntry>,
}

impl BudgetTable {
    pub fn new(entries: Vec<BudgetEntry>) -> Result<Self, BudgetError> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.category.trim().is_empty() {
                return Err(BudgetError::EmptyCategory(i + 1));
            }
            if entry.annual_budget < Decimal::ZERO {
                return Err(BudgetError::NegativeBudget(
                    entry.category.clone(),
                    entry.annual_budget,
                ));
            }
            if entry.annual_budget > super::max_amount() {
                return Err(BudgetError::BudgetTooLarge(
                    entry.category.clone(),
                    entry.annual_budget,
                ));
            }
            if entries[..i].iter().any(|e| e.category == entry.category) {
                return Err(BudgetError::DuplicateCategory(entry.category.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    /// Category names in table order.
    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.category.as_str()).collect()
    }

    pub fn find(&self, category: &str) -> Option<&BudgetEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Case-insensitive lookup, used to resolve categories typed by the user.
    pub fn find_by_name(&self, name: &str) -> Option<&BudgetEntry> {
        let lower = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.category.to_lowercase() == lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_budget(&self) -> Decimal {
        self.entries.iter().map(|e| e.annual_budget).sum()
    }
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self {
            entries: vec![
                BudgetEntry::new("Ambalaj", Decimal::from(300_000)),
                BudgetEntry::new("Kimyasal", Decimal::from(500_000)),
                BudgetEntry::new("Hammadde", Decimal::from(800_000)),
                BudgetEntry::new("Etiket", Decimal::from(100_000)),
            ],
        }
    }
}
