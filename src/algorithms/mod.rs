pub mod overrides;
pub mod paired_routes;

// Common algorithm traits
use crate::error::QuoteError;
use crate::models::{Cost, DeliveryRoute, Order, WarehouseWeights};

/// Trait for delivery cost solvers
pub trait DeliveryCostSolver {
    /// Total order weight per warehouse, omitting warehouses with nothing to ship
    fn aggregate_weights(&self, order: &Order) -> WarehouseWeights;

    /// Priced candidate routes for the given warehouse weights
    fn enumerate_routes(&self, weights: &WarehouseWeights)
        -> Result<Vec<DeliveryRoute>, QuoteError>;

    /// Final cost of the order, zero when it touches no warehouse
    fn compute_delivery_cost(&self, order: &Order) -> Result<Cost, QuoteError>;
}
