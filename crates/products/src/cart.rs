use rust_decimal::Decimal;

use ledgerlab_core::{DomainError, DomainResult};

use crate::product::Product;

/// Something a cart can total.
pub trait LineItem {
    fn unit_price(&self) -> Decimal;

    fn quantity(&self) -> u32;

    /// Unit price × quantity; fails if the product does not fit in a `Decimal`.
    fn line_total(&self) -> DomainResult<Decimal> {
        self.unit_price()
            .checked_mul(Decimal::from(self.quantity()))
            .ok_or_else(|| {
                DomainError::validation("line_total", "exceeds the representable range")
            })
    }
}

/// Ordered cart of line items.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingCart<T: LineItem = Product> {
    items: Vec<T>,
}

impl<T: LineItem> Default for ShoppingCart<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: LineItem> ShoppingCart<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ unit price × quantity.
    pub fn total_cost(&self) -> DomainResult<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            total
                .checked_add(item.line_total()?)
                .ok_or_else(|| {
                    DomainError::validation("total", "exceeds the representable range")
                })
        })
    }
}

impl<T: LineItem + PartialEq> ShoppingCart<T> {
    /// Remove the first item equal to `item`; returns whether one was removed.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl<T: LineItem + core::fmt::Display> core::fmt::Display for ShoppingCart<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.items.is_empty() {
            return f.write_str("Cart is empty.");
        }
        writeln!(f, "Cart Contents:")?;
        for item in &self.items {
            writeln!(f, " - {item}")?;
        }
        match self.total_cost() {
            Ok(total) => write!(f, "Total: {total:.2}"),
            Err(_) => f.write_str("Total: unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, price: Decimal, qty: i64) -> Product {
        Product::new(name, price, qty).unwrap()
    }

    #[test]
    fn total_multiplies_price_by_quantity() {
        let mut cart = ShoppingCart::new();
        cart.add_item(product("Laptop", dec!(4500), 1));
        cart.add_item(product("Headphones", dec!(300), 2));
        assert_eq!(cart.total_cost().unwrap(), dec!(5100));
    }

    #[test]
    fn overflowing_line_total_is_an_error() {
        let mut cart = ShoppingCart::new();
        cart.add_item(product("Yacht", Decimal::MAX, 2));
        let err = cart.total_cost().unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "line_total"));
        assert!(cart.to_string().ends_with("Total: unavailable"));
    }

    #[test]
    fn overflowing_sum_is_an_error() {
        let mut cart = ShoppingCart::new();
        cart.add_item(product("Yacht", Decimal::MAX, 1));
        cart.add_item(product("Dinghy", Decimal::ONE, 1));
        let err = cart.total_cost().unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "total"));
    }

    #[test]
    fn remove_takes_only_the_first_match() {
        let rice = product("Rice", dec!(50), 5);
        let mut cart = ShoppingCart::new();
        cart.add_item(rice.clone());
        cart.add_item(rice.clone());

        assert!(cart.remove_item(&rice));
        assert_eq!(cart.items().len(), 1);
        assert!(cart.remove_item(&rice));
        assert!(!cart.remove_item(&rice));
        assert!(cart.is_empty());
    }

    #[test]
    fn empty_cart_display() {
        let cart: ShoppingCart = ShoppingCart::new();
        assert_eq!(cart.to_string(), "Cart is empty.");
        assert_eq!(cart.total_cost().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn display_lists_contents_and_total() {
        let mut cart = ShoppingCart::new();
        cart.add_item(product("Milk", dec!(15), 10));
        assert_eq!(
            cart.to_string(),
            "Cart Contents:\n - Milk - 10 @ 15.00 each\nTotal: 150.00"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the total is the sum of the line totals, in any order.
        #[test]
        fn total_is_order_independent(
            lines in prop::collection::vec((0i64..100_000i64, 0i64..100i64), 0..20)
        ) {
            let items: Vec<Product> = lines
                .iter()
                .map(|(cents, qty)| product("Item", Decimal::new(*cents, 2), *qty))
                .collect();

            let mut forward = ShoppingCart::new();
            let mut backward = ShoppingCart::new();
            for item in &items {
                forward.add_item(item.clone());
            }
            for item in items.iter().rev() {
                backward.add_item(item.clone());
            }

            let expected: Decimal = items
                .iter()
                .map(|p| p.price() * Decimal::from(p.quantity()))
                .sum();
            prop_assert_eq!(forward.total_cost().unwrap(), expected);
            prop_assert_eq!(backward.total_cost().unwrap(), expected);
        }
    }
}
