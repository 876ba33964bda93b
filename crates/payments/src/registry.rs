use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::methods::{BANK_TRANSFER, BankTransferProcessor, CREDIT_CARD, CreditCardProcessor};
use crate::processor::{PaymentError, PaymentProcessor};

/// Maps a payment-type string to the processor that handles it.
///
/// Injected into the order pipeline, so tests and alternative deployments can
/// supply their own processors without any global state.
pub trait PaymentProcessorProvider {
    /// Resolve the processor for `payment_type`, or fail with
    /// `PaymentError::UnsupportedPaymentType`.
    fn resolve(&self, payment_type: &str) -> Result<&dyn PaymentProcessor, PaymentError>;
}

impl<P> PaymentProcessorProvider for Arc<P>
where
    P: PaymentProcessorProvider + ?Sized,
{
    fn resolve(&self, payment_type: &str) -> Result<&dyn PaymentProcessor, PaymentError> {
        (**self).resolve(payment_type)
    }
}

/// Processor factory keyed by payment type.
#[derive(Default)]
pub struct PaymentProcessorRegistry {
    processors: HashMap<String, Box<dyn PaymentProcessor>>,
}

impl PaymentProcessorRegistry {
    /// Registry without any processors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the credit card and bank transfer processors.
    pub fn with_defaults() -> Self {
        Self::new()
            .with(CREDIT_CARD, CreditCardProcessor)
            .with(BANK_TRANSFER, BankTransferProcessor)
    }

    /// Add a processor, replacing any processor registered for the same type.
    pub fn register<P>(&mut self, payment_type: impl Into<String>, processor: P) -> &mut Self
    where
        P: PaymentProcessor + 'static,
    {
        let payment_type = payment_type.into();
        debug!(payment_type = %payment_type, "payment processor registered");
        self.processors.insert(payment_type, Box::new(processor));
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with<P>(mut self, payment_type: impl Into<String>, processor: P) -> Self
    where
        P: PaymentProcessor + 'static,
    {
        self.register(payment_type, processor);
        self
    }

    pub fn supports(&self, payment_type: &str) -> bool {
        self.processors.contains_key(payment_type)
    }

    /// Registered payment types, sorted.
    pub fn supported_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.processors.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl PaymentProcessorProvider for PaymentProcessorRegistry {
    fn resolve(&self, payment_type: &str) -> Result<&dyn PaymentProcessor, PaymentError> {
        self.processors
            .get(payment_type)
            .map(|processor| processor.as_ref())
            .ok_or_else(|| PaymentError::unsupported(payment_type))
    }
}

impl core::fmt::Debug for PaymentProcessorRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaymentProcessorRegistry")
            .field("payment_types", &self.supported_types())
            .finish()
    }
}
