use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use orderflow_core::ProductId;

/// Available stock per product.
///
/// Quantities are unsigned so stock cannot go negative. Products without an
/// entry have zero stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    stock: BTreeMap<ProductId, u64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Available stock for a product (zero when unknown).
    pub fn available(&self, product_id: &ProductId) -> u64 {
        self.stock.get(product_id).copied().unwrap_or(0)
    }

    /// Set the stock level for a product, replacing any previous value.
    pub fn set(&mut self, product_id: impl Into<ProductId>, quantity: u64) {
        self.stock.insert(product_id.into(), quantity);
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, u64)> {
        self.stock.iter().map(|(id, qty)| (id, *qty))
    }

    /// Remove `quantity` units and return what is left. Returns `None`
    /// (leaving stock untouched) when not enough units are available.
    pub(crate) fn take(&mut self, product_id: &ProductId, quantity: u64) -> Option<u64> {
        let remaining = self.available(product_id).checked_sub(quantity)?;
        self.stock.insert(product_id.clone(), remaining);
        Some(remaining)
    }
}

impl<K: Into<ProductId>> FromIterator<(K, u64)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            stock: iter.into_iter().map(|(id, qty)| (id.into(), qty)).collect(),
        }
    }
}
