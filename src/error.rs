use crate::models::{WarehouseId, Weight};
use thiserror::Error;

/// Reasons an order is refused before it reaches the cost engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("unknown product code '{0}'")]
    UnknownProduct(String),
    #[error("quantity for product '{code}' must not be negative, got {quantity}")]
    NegativeQuantity { code: String, quantity: i64 },
    #[error("quantity for product '{code}' must be an integer, got {value}")]
    NonIntegerQuantity { code: String, value: String },
    #[error("quantity for product '{code}' is out of range: {value}")]
    QuantityOutOfRange { code: String, value: String },
}

/// Reasons a valid order still cannot be priced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("delivery cost of the route starting at warehouse {start} is too large to represent")]
    CostOverflow { start: WarehouseId },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse catalog file")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no warehouses")]
    Empty,
    #[error("warehouse {0} is defined more than once")]
    DuplicateWarehouse(WarehouseId),
    #[error("product '{code}' is stocked by both warehouse {first} and warehouse {second}")]
    DuplicateProduct {
        code: String,
        first: WarehouseId,
        second: WarehouseId,
    },
    #[error("warehouse {warehouse} lists product '{code}' under key '{key}'")]
    MismatchedProductKey {
        key: String,
        code: String,
        warehouse: WarehouseId,
    },
    #[error("product '{code}' at warehouse {warehouse} has invalid unit weight {unit_weight}")]
    InvalidUnitWeight {
        code: String,
        warehouse: WarehouseId,
        unit_weight: Weight,
    },
    #[error("warehouse {warehouse} detours through unknown warehouse {detour}")]
    UnknownDetour {
        warehouse: WarehouseId,
        detour: WarehouseId,
    },
    #[error("warehouse {0} cannot detour through itself")]
    SelfDetour(WarehouseId),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid listen address '{value}'")]
    InvalidAddress {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid value '{value}' for {key}, expected true or false")]
    InvalidFlag { key: &'static str, value: String },
    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}
