//! Warehouse inventory module.
//!
//! Stock items are validated at construction (no negative quantities) and can
//! only be adjusted in ways that keep stock at or above zero.

pub mod item;

pub use item::{ElectronicItem, GroceryItem, ItemCategory, StockItem};
