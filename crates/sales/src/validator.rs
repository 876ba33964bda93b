//! Order request validation.
//!
//! Checks the shape of an incoming order before any stock or payment work is
//! attempted. Validation fails fast on the first violation.

use thiserror::Error;
use tracing::warn;

use orderflow_parties::Customer;

use crate::order::OrderItem;

/// Rejection reasons for an order request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Customer id or email is empty.
    #[error("invalid customer data")]
    InvalidCustomer,

    #[error("order items cannot be empty")]
    EmptyItems,

    #[error("payment type is required")]
    MissingPaymentType,
}

/// Validates customer, items and payment type, in that order.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderValidator;

impl OrderValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_order(
        &self,
        customer: &Customer,
        items: &[OrderItem],
        payment_type: &str,
    ) -> Result<(), ValidationError> {
        self.validate_customer(customer)?;
        self.validate_items(items)?;
        self.validate_payment_type(payment_type)?;
        Ok(())
    }

    fn validate_customer(&self, customer: &Customer) -> Result<(), ValidationError> {
        if customer.id().is_blank() || !customer.has_email() {
            warn!(customer_id = %customer.id(), "customer data is invalid");
            return Err(ValidationError::InvalidCustomer);
        }
        Ok(())
    }

    fn validate_items(&self, items: &[OrderItem]) -> Result<(), ValidationError> {
        if items.is_empty() {
            warn!("order has no items");
            return Err(ValidationError::EmptyItems);
        }
        Ok(())
    }

    fn validate_payment_type(&self, payment_type: &str) -> Result<(), ValidationError> {
        if payment_type.trim().is_empty() {
            warn!("payment type is missing");
            return Err(ValidationError::MissingPaymentType);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_core::Money;
    use orderflow_products::Product;

    fn customer() -> Customer {
        Customer::new("CUST100", "Ichiro Tanaka", "ichiro.tanaka@example.com")
    }

    fn items() -> Vec<OrderItem> {
        vec![OrderItem::new(
            Product::new("ITEM001", "Wireless mouse", Money::whole(3000)),
            1,
        )]
    }

    #[test]
    fn valid_order_passes() {
        let validator = OrderValidator::new();
        assert_eq!(
            validator.validate_order(&customer(), &items(), "CREDIT_CARD"),
            Ok(())
        );
    }

    #[test]
    fn blank_customer_id_is_rejected() {
        let customer = Customer::new("", "Ichiro Tanaka", "ichiro.tanaka@example.com");
        let err = OrderValidator::new()
            .validate_order(&customer, &items(), "CREDIT_CARD")
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCustomer);
    }

    #[test]
    fn blank_email_is_rejected() {
        let customer = Customer::new("CUST100", "Ichiro Tanaka", "");
        let err = OrderValidator::new()
            .validate_order(&customer, &items(), "CREDIT_CARD")
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCustomer);
    }

    #[test]
    fn empty_items_are_rejected() {
        let err = OrderValidator::new()
            .validate_order(&customer(), &[], "CREDIT_CARD")
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyItems);
    }

    #[test]
    fn missing_payment_type_is_rejected() {
        for payment_type in ["", "   "] {
            let err = OrderValidator::new()
                .validate_order(&customer(), &items(), payment_type)
                .unwrap_err();
            assert_eq!(err, ValidationError::MissingPaymentType);
        }
    }

    #[test]
    fn first_violation_wins() {
        let customer = Customer::new("", "", "");
        let err = OrderValidator::new()
            .validate_order(&customer, &[], "")
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidCustomer);

        let err = OrderValidator::new()
            .validate_order(&self::customer(), &[], "")
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyItems);
    }

    #[test]
    fn error_messages_are_human_readable() {
        assert_eq!(
            ValidationError::MissingPaymentType.to_string(),
            "payment type is required"
        );
    }
}
