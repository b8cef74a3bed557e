use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use std::sync::Arc;

use crate::{catalog, quote};
use engine::PricingEngine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<PricingEngine>,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the HTTP router around `engine`.
pub fn router(engine: PricingEngine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/health", get(health))
        .route("/catalog/{category}", get(catalog::list))
        .route("/promos", get(catalog::promos))
        .route("/quote", post(quote::quote))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: PricingEngine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: PricingEngine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
