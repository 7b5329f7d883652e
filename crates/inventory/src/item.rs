use serde::{Deserialize, Serialize};

use ledgerlab_core::{DomainError, DomainResult, Rule, non_blank};

/// Shelf the item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Electronics,
    Grocery,
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemCategory::Electronics => f.write_str("Electronics"),
            ItemCategory::Grocery => f.write_str("Grocery"),
        }
    }
}

/// Anything the warehouse keeps a count of.
pub trait StockItem {
    fn name(&self) -> &str;

    fn quantity(&self) -> u32;

    fn category(&self) -> ItemCategory;
}

fn opening_quantity(quantity: i64) -> DomainResult<u32> {
    let quantity = Rule::NonNegative.check("quantity", quantity)?;
    u32::try_from(quantity)
        .map_err(|_| DomainError::validation("quantity", format!("{quantity} is too large")))
}

macro_rules! stock_item {
    ($t:ident, $category:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $t {
            name: String,
            quantity: u32,
        }

        impl $t {
            /// Rejects a blank name or a negative quantity.
            pub fn new(name: impl Into<String>, quantity: i64) -> DomainResult<Self> {
                Ok(Self {
                    name: non_blank("name", name)?,
                    quantity: opening_quantity(quantity)?,
                })
            }

            /// Apply a signed stock movement; returns the new quantity.
            pub fn adjust_stock(&mut self, delta: i64) -> DomainResult<u32> {
                if delta == 0 {
                    return Err(DomainError::validation("delta", "cannot be zero"));
                }
                let next = i64::from(self.quantity) + delta;
                if next < 0 {
                    return Err(DomainError::validation("quantity", "stock cannot go negative"));
                }
                self.quantity = u32::try_from(next).map_err(|_| {
                    DomainError::validation("quantity", format!("{next} is too large"))
                })?;
                tracing::debug!(
                    item = %self.name,
                    delta,
                    quantity = self.quantity,
                    "stock adjusted"
                );
                Ok(self.quantity)
            }
        }

        impl StockItem for $t {
            fn name(&self) -> &str {
                &self.name
            }

            fn quantity(&self) -> u32 {
                self.quantity
            }

            fn category(&self) -> ItemCategory {
                $category
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "[{}] {} - Qty: {}", $category, self.name, self.quantity)
            }
        }
    };
}

stock_item!(ElectronicItem, ItemCategory::Electronics);
stock_item!(GroceryItem, ItemCategory::Grocery);
