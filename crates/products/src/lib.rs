//! Products domain module.
//!
//! Catalog entries as seen by the order pipeline: an identifier, a display name
//! and an immutable unit price.

pub mod product;

pub use product::{Product, ProductRef};
