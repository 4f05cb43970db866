//! HTTP facade.
//!
//! Routes:
//!
//! - `GET /oanda/api/v1/klines?symbol&interval&startTime&endTime` — Binance
//!   kline array for the symbol
//! - `GET /` — liveness message
//!
//! Every route carries a permissive CORS policy. Failures render as
//! `{"detail": "..."}` via [`ProxyError`]'s `IntoResponse`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::constants::{KLINES_ROUTE, STATUS_MESSAGE, STATUS_ROUTE};
use crate::error::{ProxyError, Result};
use crate::proxy::KlineProxy;
use crate::types::kline::{KlineQuery, KlineRow};

/// Build the application router around a shared [`KlineProxy`].
pub fn router(proxy: Arc<KlineProxy>) -> Router {
    Router::new()
        .route(KLINES_ROUTE, get(klines))
        .route(STATUS_ROUTE, get(status))
        .layer(CorsLayer::permissive())
        .with_state(proxy)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: SocketAddr, proxy: Arc<KlineProxy>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("kline proxy listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(proxy))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// GET /oanda/api/v1/klines
async fn klines(
    State(proxy): State<Arc<KlineProxy>>,
    query: std::result::Result<Query<KlineQuery>, QueryRejection>,
) -> Result<Json<Vec<KlineRow>>> {
    let Query(query) = query.map_err(|e| ProxyError::InvalidQuery(e.body_text()))?;
    proxy.klines(&query).await.map(Json)
}

/// GET /
async fn status() -> Json<Value> {
    Json(json!({ "message": STATUS_MESSAGE }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully stopping…");
}
