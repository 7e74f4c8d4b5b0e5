use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::CatalogError;
use crate::models::{Catalog, Distance, Product, WarehouseId, Weight};
use crate::Warehouse;

/// On-disk layout of a catalog file
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub warehouses: Vec<WarehouseRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WarehouseRecord {
    pub id: WarehouseId,
    pub name: String,
    pub distance: Distance,
    #[serde(default)]
    pub detour: Option<WarehouseId>,
    /// Product code -> unit weight
    pub products: BTreeMap<String, Weight>,
}

impl From<WarehouseRecord> for Warehouse {
    fn from(record: WarehouseRecord) -> Self {
        let products = record
            .products
            .into_iter()
            .map(|(code, unit_weight)| (code.clone(), Product::new(code, unit_weight)))
            .collect();

        let warehouse = Warehouse::new(record.id, record.name, record.distance, products);
        match record.detour {
            Some(detour) => warehouse.with_detour(detour),
            None => warehouse,
        }
    }
}

impl From<&Warehouse> for WarehouseRecord {
    fn from(warehouse: &Warehouse) -> Self {
        Self {
            id: warehouse.id,
            name: warehouse.name.clone(),
            distance: warehouse.distance,
            detour: warehouse.detour,
            products: warehouse
                .products
                .values()
                .map(|product| (product.code.clone(), product.unit_weight))
                .collect(),
        }
    }
}

/// Parses and validates a catalog from its JSON text
pub fn parse_catalog(json_str: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(json_str)?;
    Catalog::new(file.warehouses.into_iter().map(Warehouse::from).collect())
}

/// Loads a catalog file from disk
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let json_str = fs::read_to_string(path)?;
    let catalog = parse_catalog(&json_str)?;

    info!(
        path = %path.display(),
        warehouses = catalog.warehouses().count(),
        products = catalog.product_codes().len(),
        "Loaded catalog"
    );

    Ok(catalog)
}

/// Serializes a catalog back into the file layout
pub fn catalog_to_json(catalog: &Catalog) -> Result<String, CatalogError> {
    let file = CatalogFile {
        warehouses: catalog.warehouses().map(WarehouseRecord::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}
