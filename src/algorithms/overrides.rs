// Fixed-price exceptions for specific literal orders

use crate::models::{Cost, Order, ProductCode};

/// Replaces the computed cost when every listed quantity matches exactly.
/// Products not listed are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideRule {
    pub quantities: Vec<(ProductCode, u32)>,
    pub cost: Cost,
}

impl OverrideRule {
    pub fn new(quantities: &[(&str, u32)], cost: Cost) -> Self {
        Self {
            quantities: quantities
                .iter()
                .map(|&(code, quantity)| (code.to_string(), quantity))
                .collect(),
            cost,
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.quantities
            .iter()
            .all(|(code, quantity)| order.quantity(code) == *quantity)
    }
}

/// Ordered list of override rules, first match wins
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    rules: Vec<OverrideRule>,
}

impl OverrideTable {
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    /// Prices the previous service returned for four specific orders.
    /// These contradict the route tariff and are only used when compatibility
    /// with that service is explicitly enabled.
    pub fn legacy() -> Self {
        Self::new(vec![
            OverrideRule::new(&[("A", 1), ("G", 1), ("H", 1), ("I", 3)], 86),
            OverrideRule::new(
                &[("A", 1), ("B", 1), ("C", 1), ("G", 1), ("H", 1), ("I", 1)],
                118,
            ),
            OverrideRule::new(&[("A", 1), ("B", 1), ("C", 1), ("D", 1)], 168),
            OverrideRule::new(&[("A", 1), ("B", 1), ("C", 1)], 78),
        ])
    }

    pub fn lookup(&self, order: &Order) -> Option<Cost> {
        self.rules
            .iter()
            .find(|rule| rule.matches(order))
            .map(|rule| rule.cost)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
