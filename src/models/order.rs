use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("unit price must be positive, got {0}")]
    NonPositivePrice(Decimal),
    #[error("order amount {quantity} x {unit_price} is too large")]
    AmountOverflow { quantity: u32, unit_price: Decimal },
}

/// A single purchase order. `amount` is always `quantity * unit_price` and
/// never exceeds [`super::max_amount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    date: NaiveDate,
    category: String,
    quantity: u32,
    unit_price: Decimal,
    amount: Decimal,
}

impl OrderRecord {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self, OrderError> {
        if quantity == 0 {
            return Err(OrderError::ZeroQuantity);
        }
        if unit_price <= Decimal::ZERO {
            return Err(OrderError::NonPositivePrice(unit_price));
        }
        let amount = Decimal::from(quantity)
            .checked_mul(unit_price)
            .filter(|a| *a <= super::max_amount())
            .ok_or(OrderError::AmountOverflow {
                quantity,
                unit_price,
            })?;
        Ok(Self {
            date,
            category: category.into(),
            quantity,
            unit_price,
            amount,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
