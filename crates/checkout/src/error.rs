use thiserror::Error;

use orderflow_inventory::InventoryError;
use orderflow_payments::PaymentError;
use orderflow_sales::{PricingError, ValidationError};

/// Why an order could not be placed.
///
/// Wraps the error of the stage that failed without altering it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl OrderError {
    /// Error category for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::Validation(_) => "validation",
            OrderError::Inventory(_) => "inventory",
            OrderError::Pricing(_) => "pricing",
            OrderError::Payment(_) => "payment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_stage_errors_unchanged() {
        let err: OrderError = ValidationError::EmptyItems.into();
        assert_eq!(err, OrderError::Validation(ValidationError::EmptyItems));
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.to_string(), "order items cannot be empty");

        let err: OrderError = PaymentError::unsupported("CASH").into();
        assert_eq!(err.kind(), "payment");
        assert_eq!(err.to_string(), "unsupported payment type: CASH");

        let err: OrderError = InventoryError::InvalidProductData("x".to_string()).into();
        assert_eq!(err.kind(), "inventory");

        let err: OrderError = PricingError::AmountOverflow.into();
        assert_eq!(err.kind(), "pricing");
        assert_eq!(err.to_string(), "order total exceeds the supported amount range");
    }
}
