//! Sales module: what a customer asks for and how much it costs.
//!
//! Holds the order item model, request validation and pricing. Everything here
//! is pure domain logic (no IO, no storage).

pub mod order;
pub mod pricing;
pub mod validator;

pub use order::OrderItem;
pub use pricing::{AmountCalculator, PricingError};
pub use validator::{OrderValidator, ValidationError};
