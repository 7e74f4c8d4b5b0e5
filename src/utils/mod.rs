pub mod load_catalog;
pub mod pricing;
