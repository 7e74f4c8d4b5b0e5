use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::algorithms::overrides::OverrideTable;
use crate::algorithms::DeliveryCostSolver;
use crate::error::QuoteError;
use crate::models::{
    Catalog, Cost, DeliveryRoute, Leg, Order, Quote, Stop, WarehouseId, WarehouseWeights,
};
use crate::utils::pricing::leg_cost;

/// Prices orders by evaluating one route per warehouse holding stock.
///
/// A route starts at its warehouse and drives the stock to the delivery point.
/// When the warehouse's detour partner also holds stock, the route drives back
/// out to the partner and returns with the combined load. Only these route
/// shapes are considered, there is no search over other visiting orders.
#[derive(Clone)]
pub struct PairedRouteSolver {
    catalog: Arc<Catalog>,

    /// Fixed prices for literal orders, checked after the route minimum
    overrides: Option<OverrideTable>,
}

impl PairedRouteSolver {
    /// Creates a new solver over the given catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            overrides: None,
        }
    }

    /// Enables an override table
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn overrides_enabled(&self) -> bool {
        self.overrides.is_some()
    }

    /// Builds and prices the route starting at `start`.
    ///
    /// Returns `Ok(None)` when `start` has no weight in `weights` or is not in
    /// the catalog.
    pub fn build_route(
        &self,
        start: WarehouseId,
        weights: &WarehouseWeights,
    ) -> Result<Option<DeliveryRoute>, QuoteError> {
        let (Some(warehouse), Some(&first_weight)) =
            (self.catalog.warehouse(start), weights.get(&start))
        else {
            return Ok(None);
        };
        let overflow = || QuoteError::CostOverflow { start };
        let price = |weight, distance| leg_cost(weight, distance).ok_or_else(overflow);

        let mut weight = first_weight;

        let mut legs = vec![Leg {
            from: Stop::Warehouse(start),
            to: Stop::DeliveryPoint,
            distance: warehouse.distance,
            weight,
            cost: price(weight, warehouse.distance)?,
        }];

        let detour = warehouse.detour.and_then(|detour| {
            let partner_weight = *weights.get(&detour)?;
            let distance = self.catalog.distance(detour)?;
            Some((detour, partner_weight, distance))
        });

        if let Some((detour, partner_weight, distance)) = detour {
            // Back out to the partner carrying the first load
            legs.push(Leg {
                from: Stop::DeliveryPoint,
                to: Stop::Warehouse(detour),
                distance,
                weight,
                cost: price(weight, distance)?,
            });

            weight += partner_weight;
            legs.push(Leg {
                from: Stop::Warehouse(detour),
                to: Stop::DeliveryPoint,
                distance,
                weight,
                cost: price(weight, distance)?,
            });
        }

        let route =
            DeliveryRoute::new(start, detour.map(|(id, _, _)| id), legs).ok_or_else(overflow)?;
        debug!(
            start,
            detour = ?route.detour,
            legs = route.legs.len(),
            cost = route.cost,
            "Priced candidate route"
        );

        Ok(Some(route))
    }

    /// Prices an order, keeping the candidate routes for inspection.
    ///
    /// Fails only when a candidate route costs more than a [`Cost`] can hold.
    pub fn quote(&self, order: &Order) -> Result<Quote, QuoteError> {
        let weights = self.aggregate_weights(order);
        let candidates = self.enumerate_routes(&weights)?;

        // min_by_key keeps the first of equal candidates, i.e. the lowest start id
        let route = candidates.iter().min_by_key(|route| route.cost).cloned();
        let route_cost = route.as_ref().map(|route| route.cost).unwrap_or(0);

        let override_cost = self
            .overrides
            .as_ref()
            .and_then(|overrides| overrides.lookup(order));

        if let Some(cost) = override_cost {
            warn!(
                computed = route_cost,
                cost, "Order matched an override rule, replacing computed cost"
            );
        }

        Ok(Quote {
            cost: override_cost.unwrap_or(route_cost),
            route,
            candidates,
            overridden: override_cost.is_some(),
        })
    }

    /// Prices independent orders in parallel, preserving their order
    pub fn quote_batch(&self, orders: &[Order]) -> Vec<Result<Cost, QuoteError>> {
        orders
            .par_iter()
            .map(|order| self.compute_delivery_cost(order))
            .collect()
    }
}

impl DeliveryCostSolver for PairedRouteSolver {
    fn aggregate_weights(&self, order: &Order) -> WarehouseWeights {
        let mut weights = WarehouseWeights::new();

        for (code, &quantity) in &order.items {
            if quantity == 0 {
                continue;
            }
            let Some(warehouse) = self.catalog.product_warehouse(code) else {
                continue;
            };
            if let Some(unit_weight) = self.catalog.unit_weight(warehouse, code) {
                *weights.entry(warehouse).or_insert(0.0) += unit_weight * f64::from(quantity);
            }
        }

        weights.retain(|_, weight| *weight > 0.0);
        weights
    }

    fn enumerate_routes(
        &self,
        weights: &WarehouseWeights,
    ) -> Result<Vec<DeliveryRoute>, QuoteError> {
        let mut routes = Vec::with_capacity(weights.len());
        for &start in weights.keys() {
            if let Some(route) = self.build_route(start, weights)? {
                routes.push(route);
            }
        }
        Ok(routes)
    }

    fn compute_delivery_cost(&self, order: &Order) -> Result<Cost, QuoteError> {
        self.quote(order).map(|quote| quote.cost)
    }
}
