use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderflow_core::Money;
use orderflow_parties::Customer;

/// Payment-stage failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// No processor is registered for the requested payment type.
    #[error("unsupported payment type: {0}")]
    UnsupportedPaymentType(String),

    /// The processor ran but the payment did not go through.
    #[error("payment processing failed ({payment_type}): {reason}")]
    Processing {
        payment_type: String,
        reason: String,
    },
}

impl PaymentError {
    pub fn unsupported(payment_type: impl Into<String>) -> Self {
        Self::UnsupportedPaymentType(payment_type.into())
    }

    pub fn processing(payment_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Processing {
            payment_type: payment_type.into(),
            reason: reason.into(),
        }
    }
}

/// Result of a payment attempt that reached the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentOutcome {
    Approved,
    Declined { reason: String },
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved)
    }
}

/// One payment method.
///
/// `Ok(Declined)` means the provider answered and refused; `Err` means the
/// attempt itself failed. Callers treat both as a failed payment.
pub trait PaymentProcessor: Send + Sync {
    fn process(&self, customer: &Customer, amount: Money) -> Result<PaymentOutcome, PaymentError>;
}

impl<F> PaymentProcessor for F
where
    F: Fn(&Customer, Money) -> Result<PaymentOutcome, PaymentError> + Send + Sync,
{
    fn process(&self, customer: &Customer, amount: Money) -> Result<PaymentOutcome, PaymentError> {
        self(customer, amount)
    }
}
