// Order model representing requested product quantities

use crate::error::OrderError;
use crate::models::{Catalog, ProductCode, WarehouseId};
use std::collections::{BTreeMap, BTreeSet};

/// Represents a customer's order with products and quantities.
///
/// Codes that are not listed have quantity zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    /// Map of product codes to their requested quantities
    pub items: BTreeMap<ProductCode, u32>,
}

impl Order {
    /// Creates a new empty order
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Builds an order from raw quantities, rejecting anything the catalog
    /// cannot price: unknown codes, negative quantities and quantities that
    /// do not fit in a `u32`. Repeated codes are summed and the sum must fit
    /// as well.
    pub fn from_quantities<I, S>(quantities: I, catalog: &Catalog) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<ProductCode>,
    {
        let mut order = Self::new();

        for (code, quantity) in quantities {
            let code = code.into();
            if !catalog.contains_product(&code) {
                return Err(OrderError::UnknownProduct(code));
            }
            if quantity < 0 {
                return Err(OrderError::NegativeQuantity { code, quantity });
            }
            let quantity = u32::try_from(quantity).map_err(|_| OrderError::QuantityOutOfRange {
                code: code.clone(),
                value: quantity.to_string(),
            })?;
            let Some(total) = order.quantity(&code).checked_add(quantity) else {
                let total = u64::from(order.quantity(&code)) + u64::from(quantity);
                return Err(OrderError::QuantityOutOfRange {
                    code,
                    value: total.to_string(),
                });
            };
            order.update_quantity(code, total);
        }

        Ok(order)
    }

    /// Adds an item to the order with specified quantity, saturating at `u32::MAX`
    pub fn add_item<S: Into<ProductCode>>(&mut self, code: S, quantity: u32) {
        if quantity > 0 {
            let entry = self.items.entry(code.into()).or_insert(0);
            *entry = entry.saturating_add(quantity);
        }
    }

    /// Removes an item from the order
    pub fn remove_item(&mut self, code: &str) {
        self.items.remove(code);
    }

    /// Updates the quantity of an item, removing it when set to zero
    pub fn update_quantity<S: Into<ProductCode>>(&mut self, code: S, quantity: u32) {
        let code = code.into();
        if quantity > 0 {
            self.items.insert(code, quantity);
        } else {
            self.items.remove(&code);
        }
    }

    /// Requested quantity of `code`, zero when absent
    pub fn quantity(&self, code: &str) -> u32 {
        self.items.get(code).copied().unwrap_or(0)
    }

    /// Gets the total number of unique products in the order
    pub fn unique_product_count(&self) -> usize {
        self.items.len()
    }

    /// Gets the total number of units (including quantities)
    pub fn total_item_count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the warehouses stocking at least one product of this order
    pub fn find_relevant_warehouses(&self, catalog: &Catalog) -> Vec<WarehouseId> {
        self.items
            .iter()
            .filter(|(_, &quantity)| quantity > 0)
            .filter_map(|(code, _)| catalog.product_warehouse(code))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<S: Into<ProductCode>> FromIterator<(S, u32)> for Order {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut order = Order::new();
        for (code, quantity) in iter {
            order.add_item(code, quantity);
        }
        order
    }
}
