use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use orderflow_core::ProductId;
use orderflow_sales::OrderItem;

use crate::stock::Inventory;

/// Inventory-stage failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Item has no product, a blank product id, or a non-positive quantity.
    #[error("invalid product data in order items: {0}")]
    InvalidProductData(String),

    #[error(
        "insufficient stock for product {product_id} (requested: {requested}, available: {available})"
    )]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },
}

/// Stock checks and stock reservation for orders.
#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    inventory: Inventory,
}

impl InventoryService {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    pub fn stock_of(&self, product_id: &ProductId) -> u64 {
        self.inventory.available(product_id)
    }

    /// Verify every item is well formed and that stock covers the order.
    ///
    /// Quantities for a product listed on several lines are added up before
    /// comparing with stock. Read-only; stops at the first offending item.
    pub fn check_stock(&self, items: &[OrderItem]) -> Result<(), InventoryError> {
        let requests = requested_totals(items)?;
        self.ensure_available(&requests)?;
        for &(product_id, requested) in &requests {
            debug!(product_id = %product_id, requested, "stock available");
        }
        Ok(())
    }

    /// Decrement stock for every item of a paid order.
    ///
    /// Repeats the `check_stock` comparison before any entry changes, so on
    /// error the inventory is left untouched.
    pub fn update_stock(&mut self, items: &[OrderItem]) -> Result<(), InventoryError> {
        let requests = requested_totals(items)?;
        self.ensure_available(&requests)?;

        for (product_id, requested) in requests {
            let available = self.inventory.available(product_id);
            let remaining = self.inventory.take(product_id, requested).ok_or_else(|| {
                InventoryError::InsufficientStock {
                    product_id: product_id.clone(),
                    requested,
                    available,
                }
            })?;
            debug!(
                product_id = %product_id,
                removed = requested,
                remaining,
                "stock decremented"
            );
        }
        info!(items = items.len(), "stock updated");
        Ok(())
    }

    fn ensure_available(&self, requests: &[(&ProductId, u64)]) -> Result<(), InventoryError> {
        for &(product_id, requested) in requests {
            let available = self.inventory.available(product_id);
            if requested > available {
                warn!(
                    product_id = %product_id,
                    requested,
                    available,
                    "insufficient stock"
                );
                return Err(InventoryError::InsufficientStock {
                    product_id: product_id.clone(),
                    requested,
                    available,
                });
            }
        }
        Ok(())
    }
}

/// Units requested per product, in order of first appearance.
fn requested_totals(items: &[OrderItem]) -> Result<Vec<(&ProductId, u64)>, InventoryError> {
    let mut totals: Vec<(&ProductId, u64)> = Vec::new();
    let mut positions: BTreeMap<&ProductId, usize> = BTreeMap::new();
    for item in items {
        let (product_id, requested) = requested_units(item)?;
        match positions.get(product_id) {
            Some(&pos) => totals[pos].1 = totals[pos].1.saturating_add(requested),
            None => {
                positions.insert(product_id, totals.len());
                totals.push((product_id, requested));
            }
        }
    }
    Ok(totals)
}

fn requested_units(item: &OrderItem) -> Result<(&ProductId, u64), InventoryError> {
    if let Some(reason) = item.defect() {
        warn!(reason = %reason, "invalid product data in order items");
        return Err(InventoryError::InvalidProductData(reason));
    }
    match (item.product_id(), u64::try_from(item.quantity())) {
        (Some(product_id), Ok(requested)) => Ok((product_id, requested)),
        _ => Err(InventoryError::InvalidProductData(
            "order item cannot be reserved".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_core::Money;
    use orderflow_products::{Product, ProductRef};
    use proptest::prelude::*;

    fn product(id: &str) -> Product {
        Product::new(id, id, Money::whole(1000))
    }

    fn service() -> InventoryService {
        InventoryService::new(
            [("ITEM001", 50), ("ITEM002", 30), ("ITEM003", 0)]
                .into_iter()
                .collect(),
        )
    }

    fn id(value: &str) -> ProductId {
        ProductId::new(value)
    }

    #[test]
    fn check_stock_passes_when_everything_is_available() {
        let items = vec![
            OrderItem::new(product("ITEM001"), 1),
            OrderItem::new(product("ITEM002"), 30),
        ];
        assert_eq!(service().check_stock(&items), Ok(()));
    }

    #[test]
    fn check_stock_reports_insufficient_stock() {
        let items = vec![
            OrderItem::new(product("ITEM001"), 1),
            OrderItem::new(product("ITEM003"), 1),
        ];
        let err = service().check_stock(&items).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                product_id: id("ITEM003"),
                requested: 1,
                available: 0,
            }
        );
        assert!(err.to_string().contains("insufficient stock for product ITEM003"));
    }

    #[test]
    fn unknown_product_counts_as_zero_stock() {
        let items = vec![OrderItem::new(product("ITEM404"), 1)];
        match service().check_stock(&items).unwrap_err() {
            InventoryError::InsufficientStock { available: 0, .. } => {}
            other => panic!("Expected InsufficientStock, got {other:?}"),
        }
    }

    #[test]
    fn check_stock_rejects_invalid_items() {
        let cases = vec![
            OrderItem::new(ProductRef::Absent, 1),
            OrderItem::new(product(""), 1),
            OrderItem::new(product("ITEM001"), 0),
            OrderItem::new(product("ITEM001"), -2),
        ];
        for item in cases {
            match service().check_stock(std::slice::from_ref(&item)) {
                Err(InventoryError::InvalidProductData(_)) => {}
                other => panic!("Expected InvalidProductData for {item:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn check_stock_does_not_mutate() {
        let service = service();
        let before = service.inventory().clone();
        let _ = service.check_stock(&[OrderItem::new(product("ITEM001"), 10)]);
        assert_eq!(service.inventory(), &before);
    }

    #[test]
    fn update_stock_decrements_each_product() {
        let mut service = service();
        let items = vec![
            OrderItem::new(product("ITEM001"), 1),
            OrderItem::new(product("ITEM002"), 1),
        ];
        service.check_stock(&items).unwrap();
        service.update_stock(&items).unwrap();

        assert_eq!(service.stock_of(&id("ITEM001")), 49);
        assert_eq!(service.stock_of(&id("ITEM002")), 29);
        assert_eq!(service.stock_of(&id("ITEM003")), 0);
    }

    #[test]
    fn update_stock_is_all_or_nothing() {
        let mut service = service();
        let items = vec![
            OrderItem::new(product("ITEM001"), 5),
            OrderItem::new(product("ITEM003"), 1),
        ];
        let before = service.inventory().clone();

        assert!(service.update_stock(&items).is_err());
        assert_eq!(service.inventory(), &before);
    }

    #[test]
    fn update_stock_adds_up_repeated_products() {
        let mut service = InventoryService::new([("ITEM001", 3)].into_iter().collect());
        let items = vec![
            OrderItem::new(product("ITEM001"), 2),
            OrderItem::new(product("ITEM001"), 2),
        ];

        // Each line fits on its own, the sum does not.
        let expected = InventoryError::InsufficientStock {
            product_id: id("ITEM001"),
            requested: 4,
            available: 3,
        };
        assert_eq!(service.check_stock(&items), Err(expected.clone()));
        assert_eq!(service.update_stock(&items), Err(expected));
        assert_eq!(service.stock_of(&id("ITEM001")), 3);

        let fits = vec![
            OrderItem::new(product("ITEM001"), 1),
            OrderItem::new(product("ITEM001"), 2),
        ];
        assert_eq!(service.check_stock(&fits), Ok(()));
        service.update_stock(&fits).unwrap();
        assert_eq!(service.stock_of(&id("ITEM001")), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: requests within stock always pass the check.
        #[test]
        fn requests_within_stock_pass(
            lines in prop::collection::vec((1u64..1_000u64, 0u64..1_000u64), 1..10)
        ) {
            let inventory: Inventory = lines
                .iter()
                .enumerate()
                .map(|(idx, (requested, extra))| (format!("ITEM{idx:03}"), requested + extra))
                .collect();
            let items: Vec<OrderItem> = lines
                .iter()
                .enumerate()
                .map(|(idx, (requested, _))| {
                    OrderItem::new(product(&format!("ITEM{idx:03}")), *requested as i64)
                })
                .collect();

            let mut service = InventoryService::new(inventory);
            prop_assert_eq!(service.check_stock(&items), Ok(()));
            prop_assert_eq!(service.update_stock(&items), Ok(()));
            for (idx, (_, extra)) in lines.iter().enumerate() {
                prop_assert_eq!(service.stock_of(&id(&format!("ITEM{idx:03}"))), *extra);
            }
        }

        /// Property: non-positive quantities are rejected before any mutation.
        #[test]
        fn non_positive_quantities_are_rejected(quantity in -1_000i64..=0i64) {
            let mut service = service();
            let before = service.inventory().clone();
            let items = vec![OrderItem::new(product("ITEM001"), quantity)];

            let check = service.check_stock(&items);
            prop_assert!(matches!(check, Err(InventoryError::InvalidProductData(_))));
            let update = service.update_stock(&items);
            prop_assert!(matches!(update, Err(InventoryError::InvalidProductData(_))));
            prop_assert_eq!(service.inventory(), &before);
        }
    }
}
