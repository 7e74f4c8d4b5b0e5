// Models module - exports all model types

mod catalog;
mod order;
mod product;
mod route;
mod warehouse;

// Re-export model types
pub use self::catalog::Catalog;
pub use self::order::Order;
pub use self::product::Product;
pub use self::route::{DeliveryRoute, Leg, Quote, Stop};
pub use self::warehouse::Warehouse;

use std::collections::BTreeMap;

// Common type aliases for improved code readability
pub type ProductCode = String;
pub type WarehouseId = u32;
pub type Weight = f64;
pub type Distance = u32;
pub type Cost = u64;

/// Total order weight per warehouse. Warehouses contributing nothing are absent.
pub type WarehouseWeights = BTreeMap<WarehouseId, Weight>;
