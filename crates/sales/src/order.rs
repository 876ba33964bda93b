use serde::{Deserialize, Serialize};

use orderflow_core::{DomainError, DomainResult, Money, ProductId};
use orderflow_products::{Product, ProductRef};

/// Order line: product reference + requested quantity.
///
/// `new` builds the item as given so that the inventory check can reject bad
/// data with a precise error; `try_new` enforces the item invariants up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product: ProductRef,
    quantity: i64,
}

impl OrderItem {
    pub fn new(product: impl Into<ProductRef>, quantity: i64) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }

    /// Build an item, checking that the product is present with a non-blank
    /// id and that the quantity is positive.
    pub fn try_new(product: impl Into<ProductRef>, quantity: i64) -> DomainResult<Self> {
        let item = Self::new(product, quantity);
        if let Some(reason) = item.defect() {
            return Err(DomainError::validation(reason));
        }
        Ok(item)
    }

    pub fn product_ref(&self) -> &ProductRef {
        &self.product
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.product()
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        self.product.product_id()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Describes why this item cannot be ordered, or `None` when it is well formed.
    ///
    /// Stock availability is not considered here.
    pub fn defect(&self) -> Option<String> {
        match &self.product {
            ProductRef::Absent => Some("order item has no product".to_string()),
            ProductRef::Present(product) if product.id().is_blank() => {
                Some("order item product id cannot be empty".to_string())
            }
            ProductRef::Present(_) if self.quantity <= 0 => Some(format!(
                "quantity must be positive (got {})",
                self.quantity
            )),
            ProductRef::Present(_) => None,
        }
    }

    /// Unit price × quantity, or `None` when the amount overflows. Items
    /// without a product or with a non-positive quantity contribute nothing.
    pub fn line_total(&self) -> Option<Money> {
        match (self.product(), u64::try_from(self.quantity)) {
            (Some(product), Ok(quantity)) => product.unit_price().checked_times(quantity),
            _ => Some(Money::zero()),
        }
    }
}
