//! Customer notifications.
//!
//! Renders order confirmation emails and hands them to a `Notifier`. There is
//! no mail transport; `LogNotifier` records the message in the log stream.

pub mod confirmation;
pub mod notifier;

pub use confirmation::{NotificationService, OrderConfirmation};
pub use notifier::{EmailMessage, LogNotifier, NotificationError, Notifier};
