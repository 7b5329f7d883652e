//! Store catalog: validated products and a generic shopping cart.

pub mod cart;
pub mod product;

pub use cart::{LineItem, ShoppingCart};
pub use product::Product;
