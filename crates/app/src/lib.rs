//! `orderflow` command-line entry point: configuration, request loading and a
//! single pipeline run.

pub mod config;
pub mod request;

use anyhow::Context;
use tracing::info;

use orderflow_checkout::{OrderPipeline, PlacedOrder, TimestampOrderIdGenerator};
use orderflow_inventory::InventoryService;
use orderflow_notifications::LogNotifier;
use orderflow_payments::PaymentProcessorRegistry;

pub use config::{AppConfig, ConfigWarning};
pub use request::{OrderRequest, PreparedOrder};

/// Place the requested order against its own inventory snapshot.
pub fn run(config: &AppConfig, request: OrderRequest) -> anyhow::Result<PlacedOrder> {
    let PreparedOrder {
        customer,
        items,
        payment_type,
        inventory,
    } = request.into_domain();

    let mut pipeline = OrderPipeline::new(
        InventoryService::new(inventory),
        PaymentProcessorRegistry::with_defaults(),
        TimestampOrderIdGenerator::new(config.order_id_prefix.clone()),
        LogNotifier,
    );

    let placed = pipeline
        .process_new_order(&customer, &items, &payment_type)
        .with_context(|| format!("order for customer {} was rejected", customer.id()))?;

    for (product_id, remaining) in pipeline.inventory().inventory().iter() {
        info!(product_id = %product_id, remaining, "stock after order");
    }
    Ok(placed)
}
