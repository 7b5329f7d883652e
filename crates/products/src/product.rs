use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerlab_core::{DomainError, DomainResult, Rule, ValueObject, non_blank};

use crate::cart::LineItem;

/// A priced quantity of one catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Decimal,
    quantity: u32,
}

impl Product {
    /// Rejects a blank name, a negative price or a negative quantity.
    pub fn new(name: impl Into<String>, price: Decimal, quantity: i64) -> DomainResult<Self> {
        let name = non_blank("name", name)?;
        let quantity = Rule::NonNegative.check("quantity", quantity)?;
        let price = Rule::NonNegative.check("price", price)?;
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::validation("quantity", format!("{quantity} is too large")))?;

        Ok(Self {
            name,
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl ValueObject for Product {}

impl LineItem for Product {
    fn unit_price(&self) -> Decimal {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {} @ {:.2} each", self.name, self.quantity, self.price)
    }
}
