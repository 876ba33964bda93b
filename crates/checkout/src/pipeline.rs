//! Order pipeline coordinator.
//!
//! ```text
//! Start
//!   ↓ validate request
//! Validated
//!   ↓ check stock (read-only)
//! StockChecked
//!   ↓ price, resolve processor, pay
//! PaymentAuthorized
//!   ↓ decrement stock
//! StockUpdated
//!   ↓ generate order id
//! OrderFinalized
//!   ↓ send confirmation (best effort)
//! NotificationSent
//!   ↓
//! Done
//! ```

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use orderflow_core::{Money, OrderId};
use orderflow_inventory::{Inventory, InventoryService};
use orderflow_notifications::{LogNotifier, NotificationService, Notifier};
use orderflow_parties::Customer;
use orderflow_payments::{
    PaymentError, PaymentOutcome, PaymentProcessorProvider, PaymentProcessorRegistry,
};
use orderflow_sales::{AmountCalculator, OrderItem, OrderValidator};

use crate::error::OrderError;
use crate::order_id::{OrderIdGenerator, TimestampOrderIdGenerator};
use crate::stage::PipelineRun;

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub total_amount: Money,
    pub payment_type: String,
    /// `false` when the confirmation could not be delivered. The order stands
    /// either way.
    pub notification_delivered: bool,
}

/// Runs orders through validation, stock, payment and notification.
///
/// ## Dependencies
///
/// - `P`: resolves payment-type strings to processors
/// - `G`: produces order ids
/// - `N`: delivers the confirmation email
///
/// The pipeline owns its inventory; `process_new_order` takes `&mut self`, so
/// orders against one pipeline never interleave.
#[derive(Debug)]
pub struct OrderPipeline<P, G, N> {
    validator: OrderValidator,
    inventory: InventoryService,
    calculator: AmountCalculator,
    payments: P,
    order_ids: G,
    notifications: NotificationService<N>,
}

impl OrderPipeline<PaymentProcessorRegistry, TimestampOrderIdGenerator, LogNotifier> {
    /// Credit card and bank transfer processors, `ORD<timestamp>` ids and
    /// log-only notifications.
    pub fn with_defaults(inventory: Inventory) -> Self {
        Self::new(
            InventoryService::new(inventory),
            PaymentProcessorRegistry::with_defaults(),
            TimestampOrderIdGenerator::default(),
            LogNotifier,
        )
    }
}

impl<P, G, N> OrderPipeline<P, G, N> {
    pub fn new(inventory: InventoryService, payments: P, order_ids: G, notifier: N) -> Self {
        Self {
            validator: OrderValidator::new(),
            inventory,
            calculator: AmountCalculator::new(),
            payments,
            order_ids,
            notifications: NotificationService::new(notifier),
        }
    }

    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn notifier(&self) -> &N {
        self.notifications.notifier()
    }
}

impl<P, G, N> OrderPipeline<P, G, N>
where
    P: PaymentProcessorProvider,
    G: OrderIdGenerator,
    N: Notifier,
{
    /// Place an order.
    ///
    /// Returns the placed order, or the error of the first stage that failed.
    /// On error, inventory is unchanged unless the failure happened after the
    /// stock update (which no stage after it can cause).
    pub fn process_new_order(
        &mut self,
        customer: &Customer,
        items: &[OrderItem],
        payment_type: &str,
    ) -> Result<PlacedOrder, OrderError> {
        let span = info_span!(
            "process_new_order",
            customer_id = %customer.id(),
            payment_type = %payment_type,
            items = items.len()
        );
        let _entered = span.enter();
        info!("order processing started");

        let mut run = PipelineRun::start();
        match self.run(&mut run, customer, items, payment_type) {
            Ok(placed) => {
                info!(
                    order_id = %placed.order_id,
                    total_amount = %placed.total_amount,
                    "order processing completed"
                );
                Ok(placed)
            }
            Err(err) => {
                warn!(
                    kind = err.kind(),
                    stage = %run.stage(),
                    error = %err,
                    "order processing aborted"
                );
                Err(err)
            }
        }
    }

    fn run(
        &mut self,
        run: &mut PipelineRun,
        customer: &Customer,
        items: &[OrderItem],
        payment_type: &str,
    ) -> Result<PlacedOrder, OrderError> {
        self.validator.validate_order(customer, items, payment_type)?;
        run.advance();

        self.inventory.check_stock(items)?;
        run.advance();

        let total_amount = self.calculator.calculate_total_amount(items)?;
        info!(total_amount = %total_amount, "total amount calculated");

        let processor = self.payments.resolve(payment_type)?;
        match processor.process(customer, total_amount)? {
            PaymentOutcome::Approved => {}
            PaymentOutcome::Declined { reason } => {
                return Err(PaymentError::processing(payment_type, reason).into());
            }
        }
        run.advance();

        self.inventory.update_stock(items)?;
        run.advance();

        let order_id = self.order_ids.generate();
        info!(order_id = %order_id, "order finalized");
        run.advance();

        let notification_delivered = match self.notifications.send_order_confirmation(
            customer,
            &order_id,
            total_amount,
            payment_type,
        ) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    order_id = %order_id,
                    error = %err,
                    "order confirmation not delivered; order stands"
                );
                false
            }
        };
        run.advance();
        run.advance();

        Ok(PlacedOrder {
            order_id,
            total_amount,
            payment_type: payment_type.to_string(),
            notification_delivered,
        })
    }
}
