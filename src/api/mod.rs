pub mod delivery_cost;
pub mod error;
pub mod state;

use axum::routing::post;
use axum::Router;
use std::sync::Arc;

use crate::api::delivery_cost::{batch_delivery_cost_handler, delivery_cost_handler};
use crate::api::state::AppState;

/// HTTP routes of the quoting service
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/calculate-delivery-cost", post(delivery_cost_handler))
        .route(
            "/calculate-delivery-cost/batch",
            post(batch_delivery_cost_handler),
        )
        .with_state(state)
}
