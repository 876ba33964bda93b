use serde::{Deserialize, Serialize};

use orderflow_core::{Entity, Money, ProductId};

/// Catalog product.
///
/// Immutable once constructed: fields are private and only exposed through
/// getters. The unit price is a `Money`, so it can never be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: Money,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Reference from an order item to a product.
///
/// A missing product is an explicit `Absent` variant rather than a null
/// reference; downstream stages decide how to reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductRef {
    Present(Product),
    Absent,
}

impl ProductRef {
    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductRef::Present(product) => Some(product),
            ProductRef::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ProductRef::Present(_))
    }

    /// Identifier of the referenced product, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        self.product().map(Product::id)
    }
}

impl From<Product> for ProductRef {
    fn from(value: Product) -> Self {
        ProductRef::Present(value)
    }
}

impl From<Option<Product>> for ProductRef {
    fn from(value: Option<Product>) -> Self {
        value.map_or(ProductRef::Absent, ProductRef::Present)
    }
}
