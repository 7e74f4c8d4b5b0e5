// Public modules
pub mod algorithms;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::paired_routes::PairedRouteSolver;
pub use algorithms::DeliveryCostSolver;
pub use models::{Catalog, DeliveryRoute, Order, Product, Quote, Warehouse};
