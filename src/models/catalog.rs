// Catalog of warehouses and the products they stock

use crate::error::CatalogError;
use crate::models::{Distance, ProductCode, Warehouse, WarehouseId, Weight};
use std::collections::{BTreeMap, HashMap};

/// Read-only reference data: warehouses, their stock and their distances.
///
/// Lookups never fail. A product or warehouse that is not in the catalog is
/// reported as `None`.
#[derive(Debug, Clone)]
pub struct Catalog {
    warehouses: BTreeMap<WarehouseId, Warehouse>,

    /// Inverted list of product codes to the warehouse stocking them
    product_index: HashMap<ProductCode, WarehouseId>,
}

impl Catalog {
    /// Creates a catalog after checking that the warehouse data is consistent
    pub fn new(warehouses: Vec<Warehouse>) -> Result<Self, CatalogError> {
        if warehouses.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_id = BTreeMap::new();
        for warehouse in warehouses {
            let id = warehouse.id;
            if by_id.insert(id, warehouse).is_some() {
                return Err(CatalogError::DuplicateWarehouse(id));
            }
        }

        let mut product_index: HashMap<ProductCode, WarehouseId> = HashMap::new();
        for warehouse in by_id.values() {
            for (key, product) in &warehouse.products {
                if *key != product.code {
                    return Err(CatalogError::MismatchedProductKey {
                        key: key.clone(),
                        code: product.code.clone(),
                        warehouse: warehouse.id,
                    });
                }
                if !product.unit_weight.is_finite() || product.unit_weight <= 0.0 {
                    return Err(CatalogError::InvalidUnitWeight {
                        code: product.code.clone(),
                        warehouse: warehouse.id,
                        unit_weight: product.unit_weight,
                    });
                }
                if let Some(first) = product_index.insert(product.code.clone(), warehouse.id) {
                    return Err(CatalogError::DuplicateProduct {
                        code: product.code.clone(),
                        first,
                        second: warehouse.id,
                    });
                }
            }

            match warehouse.detour {
                Some(detour) if detour == warehouse.id => {
                    return Err(CatalogError::SelfDetour(warehouse.id));
                }
                Some(detour) if !by_id.contains_key(&detour) => {
                    return Err(CatalogError::UnknownDetour {
                        warehouse: warehouse.id,
                        detour,
                    });
                }
                _ => {}
            }
        }

        Ok(Self {
            warehouses: by_id,
            product_index,
        })
    }

    /// The three fixed warehouses the service quotes against.
    ///
    /// Routes from C1 and C2 detour through C3, routes from C3 detour through C1.
    pub fn standard() -> Self {
        let warehouses: BTreeMap<WarehouseId, Warehouse> = standard_warehouses()
            .into_iter()
            .map(|warehouse| (warehouse.id, warehouse))
            .collect();

        let product_index = warehouses
            .values()
            .flat_map(|warehouse| {
                warehouse
                    .products
                    .keys()
                    .map(move |code| (code.clone(), warehouse.id))
            })
            .collect();

        Self {
            warehouses,
            product_index,
        }
    }

    /// Warehouse stocking `code`, if any
    pub fn product_warehouse(&self, code: &str) -> Option<WarehouseId> {
        self.product_index.get(code).copied()
    }

    /// Unit weight of `code` at `warehouse`
    pub fn unit_weight(&self, warehouse: WarehouseId, code: &str) -> Option<Weight> {
        self.warehouses.get(&warehouse)?.get_unit_weight(code)
    }

    /// Distance from `warehouse` to the delivery point
    pub fn distance(&self, warehouse: WarehouseId) -> Option<Distance> {
        self.warehouses.get(&warehouse).map(|w| w.distance)
    }

    pub fn warehouse(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.warehouses.get(&id)
    }

    /// Warehouses in ascending id order
    pub fn warehouses(&self) -> impl Iterator<Item = &Warehouse> {
        self.warehouses.values()
    }

    pub fn contains_product(&self, code: &str) -> bool {
        self.product_index.contains_key(code)
    }

    /// All recognised product codes, sorted
    pub fn product_codes(&self) -> Vec<ProductCode> {
        let mut codes: Vec<ProductCode> = self.product_index.keys().cloned().collect();
        codes.sort();
        codes
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Warehouse data backing [`Catalog::standard`]
pub(crate) fn standard_warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse::from_weights(1, "C1", 4, &[("A", 3.0), ("B", 2.0), ("C", 8.0)]).with_detour(3),
        Warehouse::from_weights(2, "C2", 3, &[("D", 12.0), ("E", 25.0), ("F", 15.0)])
            .with_detour(3),
        Warehouse::from_weights(3, "C3", 2, &[("G", 0.5), ("H", 1.0), ("I", 2.0)]).with_detour(1),
    ]
}
