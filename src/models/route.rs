// Route models for representing priced delivery routes

use crate::models::{Cost, Distance, WarehouseId, Weight};
use serde::Serialize;
use std::fmt;

/// End point of a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stop {
    Warehouse(WarehouseId),
    DeliveryPoint,
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::Warehouse(id) => write!(f, "warehouse {}", id),
            Stop::DeliveryPoint => write!(f, "delivery point"),
        }
    }
}

/// A single shipping movement, priced on its own
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: Stop,
    pub to: Stop,

    /// Distance travelled on this leg
    pub distance: Distance,

    /// Weight in transit on this leg
    pub weight: Weight,

    /// Price of this leg
    pub cost: Cost,
}

/// A priced route starting at one warehouse, optionally detouring through a second
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryRoute {
    /// Warehouse the route starts from
    pub start: WarehouseId,

    /// Warehouse picked up on the way back, if any
    pub detour: Option<WarehouseId>,

    /// Legs in travel order
    pub legs: Vec<Leg>,

    /// Sum of leg costs
    pub cost: Cost,
}

impl DeliveryRoute {
    /// Creates a route from its legs, summing their costs.
    ///
    /// Returns `None` when the sum does not fit in a [`Cost`].
    pub fn new(start: WarehouseId, detour: Option<WarehouseId>, legs: Vec<Leg>) -> Option<Self> {
        let cost = legs
            .iter()
            .try_fold(0 as Cost, |total, leg| total.checked_add(leg.cost))?;
        Some(Self {
            start,
            detour,
            legs,
            cost,
        })
    }

    /// Weight delivered at the end of the route
    pub fn delivered_weight(&self) -> Weight {
        self.legs.last().map(|leg| leg.weight).unwrap_or(0.0)
    }

    /// Legs only ever add stock, so the weight in transit never drops
    pub fn is_weight_monotonic(&self) -> bool {
        self.legs.windows(2).all(|pair| pair[0].weight <= pair[1].weight)
    }
}

/// Outcome of pricing one order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Final cost charged for the order
    pub cost: Cost,

    /// Cheapest candidate route, `None` when the order touches no warehouse
    pub route: Option<DeliveryRoute>,

    /// Every candidate route that was priced
    pub candidates: Vec<DeliveryRoute>,

    /// True when the cost came from the override table instead of `route`
    pub overridden: bool,
}

impl Quote {
    /// Quote for an order that touches no warehouse
    pub fn empty() -> Self {
        Self {
            cost: 0,
            route: None,
            candidates: Vec::new(),
            overridden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(from: Stop, to: Stop, weight: Weight, cost: Cost) -> Leg {
        Leg {
            from,
            to,
            distance: 2,
            weight,
            cost,
        }
    }

    #[test]
    fn test_route_cost_is_sum_of_legs() {
        let route = DeliveryRoute::new(
            1,
            Some(3),
            vec![
                leg(Stop::Warehouse(1), Stop::DeliveryPoint, 3.0, 40),
                leg(Stop::DeliveryPoint, Stop::Warehouse(3), 3.0, 20),
                leg(Stop::Warehouse(3), Stop::DeliveryPoint, 3.5, 20),
            ],
        )
        .unwrap();

        assert_eq!(route.cost, 80);
        assert_eq!(route.delivered_weight(), 3.5);
        assert!(route.is_weight_monotonic());
    }

    #[test]
    fn test_weight_drop_is_not_monotonic() {
        let route = DeliveryRoute::new(
            1,
            Some(3),
            vec![
                leg(Stop::Warehouse(1), Stop::DeliveryPoint, 4.0, 40),
                leg(Stop::DeliveryPoint, Stop::Warehouse(3), 2.0, 20),
            ],
        )
        .unwrap();
        assert!(!route.is_weight_monotonic());
    }

    #[test]
    fn test_route_cost_overflow() {
        let legs = vec![
            leg(Stop::Warehouse(1), Stop::DeliveryPoint, 3.0, Cost::MAX),
            leg(Stop::DeliveryPoint, Stop::Warehouse(3), 3.0, 1),
        ];
        assert_eq!(DeliveryRoute::new(1, Some(3), legs), None);
    }

    #[test]
    fn test_empty_quote() {
        let quote = Quote::empty();
        assert_eq!(quote.cost, 0);
        assert!(quote.route.is_none());
        assert!(quote.candidates.is_empty());
    }

    #[test]
    fn test_stop_display() {
        assert_eq!(Stop::Warehouse(2).to_string(), "warehouse 2");
        assert_eq!(Stop::DeliveryPoint.to_string(), "delivery point");
    }
}
