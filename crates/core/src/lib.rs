//! `orderflow-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by every pipeline
//! stage: identifiers, money and the domain error type.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OrderId, ProductId};
pub use money::Money;
pub use value_object::ValueObject;
