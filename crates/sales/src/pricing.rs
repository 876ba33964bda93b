use thiserror::Error;
use tracing::warn;

use orderflow_core::Money;

use crate::order::OrderItem;

/// Pricing failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A line total or the order total does not fit the amount range.
    #[error("order total exceeds the supported amount range")]
    AmountOverflow,
}

/// Computes order totals. Pure; fails only when the total cannot be
/// represented.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmountCalculator;

impl AmountCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Sum of unit price × quantity over all items.
    pub fn calculate_total_amount(&self, items: &[OrderItem]) -> Result<Money, PricingError> {
        items.iter().try_fold(Money::zero(), |total, item| {
            item.line_total()
                .and_then(|line| total.checked_plus(line))
                .ok_or_else(|| {
                    warn!(
                        product_id = ?item.product_id(),
                        quantity = item.quantity(),
                        "order total overflows"
                    );
                    PricingError::AmountOverflow
                })
        })
    }
}
