use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::api::{error::ApiError, state::AppState};
use crate::error::OrderError;
use crate::models::{Catalog, Cost, Order};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CostResponse {
    pub cost: Cost,
}

impl IntoResponse for CostResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BatchCostResponse {
    pub costs: Vec<Cost>,
}

impl IntoResponse for BatchCostResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Converts a request body of `code -> quantity` into a validated order.
///
/// Codes missing from the body have quantity zero. Values must be JSON
/// integers.
pub fn parse_order(body: &Map<String, Value>, catalog: &Catalog) -> Result<Order, OrderError> {
    let mut quantities = Vec::with_capacity(body.len());

    for (code, value) in body {
        if !catalog.contains_product(code) {
            return Err(OrderError::UnknownProduct(code.clone()));
        }

        let quantity = match value {
            Value::Number(number) => match number.as_i64() {
                Some(quantity) => quantity,
                None if number.is_u64() => {
                    return Err(OrderError::QuantityOutOfRange {
                        code: code.clone(),
                        value: number.to_string(),
                    })
                }
                None => {
                    return Err(OrderError::NonIntegerQuantity {
                        code: code.clone(),
                        value: number.to_string(),
                    })
                }
            },
            other => {
                return Err(OrderError::NonIntegerQuantity {
                    code: code.clone(),
                    value: other.to_string(),
                })
            }
        };

        quantities.push((code.clone(), quantity));
    }

    Order::from_quantities(quantities, catalog)
}

pub async fn delivery_cost_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Map<String, Value>>,
) -> Result<CostResponse, ApiError> {
    let order = parse_order(&body, state.solver.catalog())?;
    let quote = state.solver.quote(&order)?;

    debug!(
        products = order.unique_product_count(),
        cost = quote.cost,
        start = ?quote.route.as_ref().map(|route| route.start),
        overridden = quote.overridden,
        "Quoted order"
    );

    Ok(CostResponse { cost: quote.cost })
}

pub async fn batch_delivery_cost_handler(
    State(state): State<Arc<AppState>>,
    Json(bodies): Json<Vec<Map<String, Value>>>,
) -> Result<BatchCostResponse, ApiError> {
    let orders = bodies
        .iter()
        .enumerate()
        .map(|(index, body)| {
            parse_order(body, state.solver.catalog())
                .map_err(|error| ApiError::BadRequest(format!("order {}: {}", index, error)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let solver_state = Arc::clone(&state);
    let results = tokio::task::spawn_blocking(move || solver_state.solver.quote_batch(&orders))
        .await
        .map_err(|error| ApiError::InternalServerError(error.to_string()))?;

    let costs = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            result.map_err(|error| ApiError::BadRequest(format!("order {}: {}", index, error)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(orders = costs.len(), "Quoted batch");

    Ok(BatchCostResponse { costs })
}
