// Warehouse model representing stocking locations with a fixed delivery distance

use crate::models::{Distance, Product, ProductCode, Weight, WarehouseId};
use std::collections::HashMap;

/// Represents a warehouse that ships products to the delivery point
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    /// Unique identifier for the warehouse
    pub id: WarehouseId,

    /// Display name, e.g. "C1"
    pub name: String,

    /// Distance from the warehouse to the delivery point
    pub distance: Distance,

    /// Warehouse visited on the return trip when a route starting here detours
    pub detour: Option<WarehouseId>,

    /// Collection of products stocked at this warehouse
    pub products: HashMap<ProductCode, Product>,
}

impl Warehouse {
    /// Creates a new warehouse without a detour partner
    pub fn new<S: Into<String>>(
        id: WarehouseId,
        name: S,
        distance: Distance,
        products: HashMap<ProductCode, Product>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            distance,
            detour: None,
            products,
        }
    }

    /// Sets the warehouse a route starting here detours through
    pub fn with_detour(mut self, detour: WarehouseId) -> Self {
        self.detour = Some(detour);
        self
    }

    /// Builds a warehouse from `(code, unit weight)` pairs
    pub fn from_weights<S: Into<String>>(
        id: WarehouseId,
        name: S,
        distance: Distance,
        weights: &[(&str, Weight)],
    ) -> Self {
        let products = weights
            .iter()
            .map(|&(code, unit_weight)| (code.to_string(), Product::new(code, unit_weight)))
            .collect();

        Self::new(id, name, distance, products)
    }

    /// Checks if the warehouse stocks a specific product
    pub fn has_product(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    /// Gets the unit weight of a product if stocked here
    pub fn get_unit_weight(&self, code: &str) -> Option<Weight> {
        self.products.get(code).map(|p| p.unit_weight)
    }

    /// Gets all product codes stocked at this warehouse
    pub fn get_product_codes(&self) -> Vec<ProductCode> {
        let mut codes: Vec<ProductCode> = self.products.keys().cloned().collect();
        codes.sort();
        codes
    }
}
