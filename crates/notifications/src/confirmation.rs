use tracing::info;

use orderflow_core::{Money, OrderId};
use orderflow_parties::Customer;

use crate::notifier::{EmailMessage, NotificationError, Notifier};

/// Order confirmation email content.
#[derive(Debug, Clone, Copy)]
pub struct OrderConfirmation<'a> {
    pub customer: &'a Customer,
    pub order_id: &'a OrderId,
    pub total_amount: Money,
    pub payment_type: &'a str,
}

impl OrderConfirmation<'_> {
    pub fn subject(&self) -> String {
        format!("Thank you for your order (order id: {})", self.order_id)
    }

    pub fn body(&self) -> String {
        format!(
            "Dear {},\n\nThank you for your order.\nTotal amount: {}\nPayment method: {}\n",
            self.customer.name(),
            self.total_amount,
            self.payment_type
        )
    }

    /// Email addressed to the customer.
    pub fn render(&self) -> EmailMessage {
        EmailMessage {
            to: self.customer.email().to_string(),
            subject: self.subject(),
            body: self.body(),
        }
    }
}

/// Sends order-related messages to customers through a `Notifier`.
#[derive(Debug, Clone, Default)]
pub struct NotificationService<N> {
    notifier: N,
}

impl<N> NotificationService<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<N: Notifier> NotificationService<N> {
    pub fn send_order_confirmation(
        &self,
        customer: &Customer,
        order_id: &OrderId,
        total_amount: Money,
        payment_type: &str,
    ) -> Result<(), NotificationError> {
        let message = OrderConfirmation {
            customer,
            order_id,
            total_amount,
            payment_type,
        }
        .render();

        self.notifier.send(&message)?;
        info!(to = %message.to, order_id = %order_id, "order confirmation sent");
        Ok(())
    }
}
