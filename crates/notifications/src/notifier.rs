use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("failed to deliver notification to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}

impl NotificationError {
    pub fn delivery(recipient: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Delivery {
            recipient: recipient.into(),
            reason: reason.into(),
        }
    }
}

/// Delivery channel for customer messages.
pub trait Notifier {
    fn send(&self, message: &EmailMessage) -> Result<(), NotificationError>;
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn send(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        (**self).send(message)
    }
}

impl<N> Notifier for Box<N>
where
    N: Notifier + ?Sized,
{
    fn send(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        (**self).send(message)
    }
}

/// "Sends" email by writing it to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        info!(to = %message.to, subject = %message.subject, "email sent");
        Ok(())
    }
}
