//! JSON order requests.
//!
//! ```json
//! {
//!   "customer": { "id": "CUST100", "name": "...", "email": "..." },
//!   "items": [{ "product_id": "ITEM001", "name": "...", "unit_price": "3000", "quantity": 1 }],
//!   "payment_type": "CREDIT_CARD",
//!   "inventory": { "ITEM001": 50 }
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use orderflow_core::Money;
use orderflow_inventory::Inventory;
use orderflow_parties::Customer;
use orderflow_products::{Product, ProductRef};
use orderflow_sales::OrderItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One line of the request. A missing `product_id` means the item references
/// no product; the pipeline rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: CustomerRequest,
    pub items: Vec<ItemRequest>,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub inventory: Inventory,
}

/// Domain values ready for `OrderPipeline::process_new_order`.
#[derive(Debug, Clone)]
pub struct PreparedOrder {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub payment_type: String,
    pub inventory: Inventory,
}

impl ItemRequest {
    fn into_item(self) -> OrderItem {
        let product = match self.product_id {
            Some(id) => ProductRef::Present(Product::new(id, self.name, self.unit_price)),
            None => ProductRef::Absent,
        };
        OrderItem::new(product, self.quantity)
    }
}

impl OrderRequest {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("malformed order request")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read order request {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Two items paid by credit card against a small catalog.
    pub fn sample() -> Self {
        let item = |id: &str, name: &str, price: u64| ItemRequest {
            product_id: Some(id.to_string()),
            name: name.to_string(),
            unit_price: Money::whole(price),
            quantity: 1,
        };
        Self {
            customer: CustomerRequest {
                id: "CUST100".to_string(),
                name: "Ichiro Tanaka".to_string(),
                email: "ichiro.tanaka@example.com".to_string(),
            },
            items: vec![
                item("ITEM001", "Wireless mouse", 3000),
                item("ITEM002", "Mechanical keyboard", 15000),
            ],
            payment_type: "CREDIT_CARD".to_string(),
            inventory: [("ITEM001", 50), ("ITEM002", 30), ("ITEM003", 0)]
                .into_iter()
                .collect(),
        }
    }

    pub fn into_domain(self) -> PreparedOrder {
        PreparedOrder {
            customer: Customer::new(self.customer.id, self.customer.name, self.customer.email),
            items: self.items.into_iter().map(ItemRequest::into_item).collect(),
            payment_type: self.payment_type,
            inventory: self.inventory,
        }
    }
}
