// Product model representing items stocked at a warehouse

use crate::models::{ProductCode, Weight};

/// Represents a product that a warehouse can ship
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog code of the product
    pub code: ProductCode,

    /// Weight of a single unit in kilograms
    pub unit_weight: Weight,
}

impl Product {
    /// Creates a new product with the given code and unit weight
    pub fn new<S: Into<ProductCode>>(code: S, unit_weight: Weight) -> Self {
        Self {
            code: code.into(),
            unit_weight,
        }
    }
}
