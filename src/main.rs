use anyhow::Context;
use axum::serve;
use delivery_quote::api::{router, state::AppState};
use delivery_quote::config::AppConfig;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let solver = config.build_solver().context("Failed to load catalog")?;
    info!(
        warehouses = solver.catalog().warehouses().count(),
        products = ?solver.catalog().product_codes(),
        legacy_overrides = solver.overrides_enabled(),
        "Catalog ready"
    );

    let state = Arc::new(AppState { solver });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "Listening");

    serve(listener, app).await.context("Server error")?;

    Ok(())
}
