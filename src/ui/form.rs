use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::import::{parse_date, parse_quantity};
use crate::models::{BudgetTable, OrderRecord};

const DEFAULT_QUANTITY: u32 = 100;
const DEFAULT_UNIT_PRICE: &str = "10.00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Category,
    Date,
    Quantity,
    UnitPrice,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Category, Self::Date, Self::Quantity, Self::UnitPrice]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Category => "Kategori",
            Self::Date => "Sipariş Tarihi",
            Self::Quantity => "Miktar",
            Self::UnitPrice => "Birim Fiyat (₺)",
        }
    }
}

/// New-order form state. Text fields hold what the user typed; they are
/// only interpreted on submit.
#[derive(Debug, Clone)]
pub(crate) struct OrderForm {
    pub(crate) field: FormField,
    pub(crate) category_index: usize,
    pub(crate) date: String,
    pub(crate) quantity: String,
    pub(crate) unit_price: String,
}

impl OrderForm {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            field: FormField::Category,
            category_index: 0,
            date: today.format("%Y-%m-%d").to_string(),
            quantity: DEFAULT_QUANTITY.to_string(),
            unit_price: DEFAULT_UNIT_PRICE.into(),
        }
    }

    pub(crate) fn next_field(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(idx + 1) % fields.len()];
    }

    pub(crate) fn prev_field(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// Step the focused field: cycle categories, shift the date by a day,
    /// or bump the quantity (never below 1). Unit price is typed only.
    pub(crate) fn adjust(&mut self, delta: i32, category_count: usize) {
        match self.field {
            FormField::Category => {
                if category_count == 0 {
                    return;
                }
                let n = category_count as i64;
                let next = (self.category_index as i64 + delta as i64).rem_euclid(n);
                self.category_index = next as usize;
            }
            FormField::Date => {
                if let Some(date) = parse_date(&self.date) {
                    let days = Days::new(delta.unsigned_abs() as u64);
                    let shifted = if delta >= 0 {
                        date.checked_add_days(days)
                    } else {
                        date.checked_sub_days(days)
                    };
                    if let Some(d) = shifted {
                        self.date = d.format("%Y-%m-%d").to_string();
                    }
                }
            }
            FormField::Quantity => {
                let current = parse_quantity(&self.quantity).unwrap_or(DEFAULT_QUANTITY) as i64;
                let next = (current + delta as i64).clamp(1, u32::MAX as i64);
                self.quantity = next.to_string();
            }
            FormField::UnitPrice => {}
        }
    }

    pub(crate) fn push_char(&mut self, c: char) {
        let accepts = match self.field {
            FormField::Category => false,
            FormField::Date => c.is_ascii_digit() || matches!(c, '-' | '.' | '/'),
            FormField::Quantity => c.is_ascii_digit(),
            FormField::UnitPrice => c.is_ascii_digit() || c == '.',
        };
        if let (true, Some(text)) = (accepts, self.focused_text()) {
            text.push(c);
        }
    }

    pub(crate) fn pop_char(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Category => None,
            FormField::Date => Some(&mut self.date),
            FormField::Quantity => Some(&mut self.quantity),
            FormField::UnitPrice => Some(&mut self.unit_price),
        }
    }

    pub(crate) fn selected_category<'a>(&self, budget: &'a BudgetTable) -> Option<&'a str> {
        budget
            .entries()
            .get(self.category_index)
            .map(|e| e.category.as_str())
    }

    /// Validate the fields the way the form widget would and build the
    /// order. Errors are user-facing messages.
    pub(crate) fn build(&self, budget: &BudgetTable) -> Result<OrderRecord, String> {
        let category = self
            .selected_category(budget)
            .ok_or_else(|| "No budget categories to order against".to_string())?;
        let date = parse_date(&self.date).ok_or_else(|| format!("Invalid date: {}", self.date))?;
        let quantity = parse_quantity(&self.quantity)
            .filter(|q| *q >= 1)
            .ok_or_else(|| format!("Quantity must be a whole number ≥ 1: {}", self.quantity))?;
        let unit_price = Decimal::from_str(self.unit_price.trim())
            .ok()
            .filter(|p| *p >= min_unit_price())
            .ok_or_else(|| format!("Unit price must be at least 0.01: {}", self.unit_price))?;

        OrderRecord::new(date, category, quantity, unit_price).map_err(|e| e.to_string())
    }

    /// Clear per-order fields after a successful submit; keep the category
    /// and date for quick repeat entry.
    pub(crate) fn reset_amounts(&mut self) {
        self.quantity = DEFAULT_QUANTITY.to_string();
        self.unit_price = DEFAULT_UNIT_PRICE.into();
        self.field = FormField::Category;
    }
}

/// Smallest unit price accepted from the form or `:order`, one kuruş.
pub(crate) fn min_unit_price() -> Decimal {
    Decimal::new(1, 2)
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
