// Integration tests for the HTTP routes
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use delivery_quote::algorithms::overrides::OverrideTable;
use delivery_quote::api::delivery_cost::{BatchCostResponse, CostResponse};
use delivery_quote::api::error::ErrorBody;
use delivery_quote::api::{router, state::AppState};
use delivery_quote::{Catalog, PairedRouteSolver, Warehouse};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(solver: PairedRouteSolver) -> Router {
    router(Arc::new(AppState { solver }))
}

fn standard_app() -> Router {
    app(PairedRouteSolver::new(Arc::new(Catalog::standard())))
}

async fn post_json<T: DeserializeOwned>(app: Router, uri: &str, body: Value) -> (StatusCode, T) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_quote_order() {
    let (status, body): (_, CostResponse) = post_json(
        standard_app(),
        "/calculate-delivery-cost",
        json!({ "A": 1, "B": 1, "C": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, CostResponse { cost: 104 });
}

#[tokio::test]
async fn test_missing_codes_default_to_zero() {
    let (status, body): (_, CostResponse) =
        post_json(standard_app(), "/calculate-delivery-cost", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.cost, 0);
}

#[tokio::test]
async fn test_negative_quantity_is_rejected() {
    let (status, body): (_, ErrorBody) = post_json(
        standard_app(),
        "/calculate-delivery-cost",
        json!({ "A": -1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.detail.contains("'A'"), "detail: {}", body.detail);
}

#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let (status, body): (_, ErrorBody) = post_json(
        standard_app(),
        "/calculate-delivery-cost",
        json!({ "A": 1, "Q": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "unknown product code 'Q'");
}

#[tokio::test]
async fn test_non_integer_quantity_is_rejected() {
    let (status, _): (_, ErrorBody) = post_json(
        standard_app(),
        "/calculate-delivery-cost",
        json!({ "G": 0.5 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_legacy_overrides_through_http() {
    let solver =
        PairedRouteSolver::new(Arc::new(Catalog::standard())).with_overrides(OverrideTable::legacy());
    let (status, body): (_, CostResponse) = post_json(
        app(solver),
        "/calculate-delivery-cost",
        json!({ "A": 1, "G": 1, "H": 1, "I": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.cost, 86);
}

#[tokio::test]
async fn test_batch_quote() {
    let (status, body): (_, BatchCostResponse) = post_json(
        standard_app(),
        "/calculate-delivery-cost/batch",
        json!([{ "A": 1, "B": 1, "C": 1 }, {}, { "A": 1, "D": 1, "G": 1 }]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.costs, vec![104, 0, 80]);
}

#[tokio::test]
async fn test_batch_rejects_any_invalid_order() {
    let (status, body): (_, ErrorBody) = post_json(
        standard_app(),
        "/calculate-delivery-cost/batch",
        json!([{ "A": 1 }, { "B": -3 }]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.detail.starts_with("order 1:"), "detail: {}", body.detail);
}

fn heavy_app() -> Router {
    let catalog = Catalog::new(vec![
        Warehouse::from_weights(1, "Heavy", 4, &[("X", 1e300)]),
        Warehouse::from_weights(2, "Light", 3, &[("Y", 1.0)]),
    ])
    .unwrap();
    app(PairedRouteSolver::new(Arc::new(catalog)))
}

#[tokio::test]
async fn test_unrepresentable_cost_is_rejected() {
    let (status, body): (_, ErrorBody) =
        post_json(heavy_app(), "/calculate-delivery-cost", json!({ "X": 1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.detail.contains("too large"), "detail: {}", body.detail);
}

#[tokio::test]
async fn test_batch_names_the_order_that_overflows() {
    let (status, body): (_, ErrorBody) = post_json(
        heavy_app(),
        "/calculate-delivery-cost/batch",
        json!([{ "Y": 1 }, { "X": 1 }]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.detail.starts_with("order 1:"), "detail: {}", body.detail);
}
