//! Payment processing.
//!
//! One `PaymentProcessor` per payment method, resolved from a payment-type
//! string through a `PaymentProcessorProvider`. New methods are added by
//! registering another processor; existing processors are never touched.

pub mod methods;
pub mod processor;
pub mod registry;

pub use methods::{
    BANK_TRANSFER, BankTransferProcessor, CASH_ON_DELIVERY, CREDIT_CARD, CashOnDeliveryProcessor,
    CreditCardProcessor,
};
pub use processor::{PaymentError, PaymentOutcome, PaymentProcessor};
pub use registry::{PaymentProcessorProvider, PaymentProcessorRegistry};
