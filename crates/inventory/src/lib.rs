//! Inventory domain module.
//!
//! Tracks available stock per product and answers whether an order can be
//! fulfilled. Stock is only ever decremented for orders that were paid for.

pub mod service;
pub mod stock;

pub use service::{InventoryError, InventoryService};
pub use stock::Inventory;
