// Per-leg tariff

use crate::models::{Cost, Distance, Weight};

/// Weight carried at the base rate
pub const BASE_WEIGHT: Weight = 5.0;

/// Each started step above the base weight adds one surcharge unit
pub const WEIGHT_STEP: Weight = 5.0;

/// Rate per distance unit up to the base weight
pub const BASE_RATE: Cost = 10;

/// Extra rate per distance unit for each surcharge unit
pub const SURCHARGE_RATE: Cost = 8;

/// Number of started weight steps above the base weight.
///
/// Uses real division so fractional kilograms still start a new step;
/// an exact multiple of the step does not. `None` when the count does not
/// fit in a `u64`.
pub fn surcharge_units(weight: Weight) -> Option<u64> {
    if weight <= BASE_WEIGHT {
        return Some(0);
    }
    let extra = weight - BASE_WEIGHT;
    let whole = (extra / WEIGHT_STEP).floor();
    // u64::MAX as f64 rounds up to 2^64, the first value that no longer fits
    if !whole.is_finite() || whole >= u64::MAX as f64 {
        return None;
    }
    let whole = whole as u64;
    if extra % WEIGHT_STEP > 0.0 {
        whole.checked_add(1)
    } else {
        Some(whole)
    }
}

/// Price of carrying `weight` over `distance`, `None` when it overflows a [`Cost`]
pub fn leg_cost(weight: Weight, distance: Distance) -> Option<Cost> {
    let rate = SURCHARGE_RATE
        .checked_mul(surcharge_units(weight)?)?
        .checked_add(BASE_RATE)?;
    Cost::from(distance).checked_mul(rate)
}
