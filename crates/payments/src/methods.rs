//! Built-in payment methods.
//!
//! The gateways behind these processors are stubs that approve every payment;
//! the processors still log what a real integration would send.

use tracing::info;

use orderflow_core::Money;
use orderflow_parties::Customer;

use crate::processor::{PaymentError, PaymentOutcome, PaymentProcessor};

pub const CREDIT_CARD: &str = "CREDIT_CARD";
pub const BANK_TRANSFER: &str = "BANK_TRANSFER";
pub const CASH_ON_DELIVERY: &str = "CASH_ON_DELIVERY";

/// Charges the customer's card through the payment gateway.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl CreditCardProcessor {
    fn call_credit_card_api(&self, customer: &Customer, amount: Money) -> Result<bool, String> {
        info!(customer_id = %customer.id(), amount = %amount, "payment gateway: charging credit card");
        Ok(true)
    }
}

impl PaymentProcessor for CreditCardProcessor {
    fn process(&self, customer: &Customer, amount: Money) -> Result<PaymentOutcome, PaymentError> {
        match self.call_credit_card_api(customer, amount) {
            Ok(true) => Ok(PaymentOutcome::Approved),
            Ok(false) => Ok(PaymentOutcome::Declined {
                reason: "card charge was declined".to_string(),
            }),
            Err(reason) => Err(PaymentError::processing(
                CREDIT_CARD,
                format!("credit card payment failed: {reason}"),
            )),
        }
    }
}

/// Bank transfer; the order is accepted while the transfer is pending.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferProcessor;

impl PaymentProcessor for BankTransferProcessor {
    fn process(&self, customer: &Customer, amount: Money) -> Result<PaymentOutcome, PaymentError> {
        info!(customer_id = %customer.id(), amount = %amount, "bank system: awaiting transfer confirmation");
        Ok(PaymentOutcome::Approved)
    }
}

/// Cash collected by the carrier on delivery.
///
/// Not registered by default; add it with
/// `PaymentProcessorRegistry::register(CASH_ON_DELIVERY, CashOnDeliveryProcessor::default())`.
#[derive(Debug, Clone, Copy)]
pub struct CashOnDeliveryProcessor {
    /// Largest amount a carrier may collect, if limited.
    limit: Option<Money>,
}

impl CashOnDeliveryProcessor {
    pub fn new() -> Self {
        Self { limit: None }
    }

    pub fn with_limit(limit: Money) -> Self {
        Self { limit: Some(limit) }
    }
}

impl Default for CashOnDeliveryProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentProcessor for CashOnDeliveryProcessor {
    fn process(&self, customer: &Customer, amount: Money) -> Result<PaymentOutcome, PaymentError> {
        if let Some(limit) = self.limit {
            if amount > limit {
                return Ok(PaymentOutcome::Declined {
                    reason: format!("amount {amount} exceeds cash on delivery limit {limit}"),
                });
            }
        }
        info!(customer_id = %customer.id(), amount = %amount, "cash on delivery scheduled");
        Ok(PaymentOutcome::Approved)
    }
}
