//! HTTP API.
//!
//! Provides two endpoints:
//! - `GET /check/{domain}` - evaluates the domain and returns the record
//! - `GET /history/{domain}?limit=N` - stored records, newest first
//!
//! Both answer with JSON bodies. Errors use `{"error": "..."}`.

mod handlers;
mod types;

use std::future::Future;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::app::shutdown_signal;
use handlers::{check_handler, history_handler, missing_domain_handler};
pub use types::{ApiState, ErrorResponse, HistoryParams};

/// Builds the API router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/check/{domain}", get(check_handler))
        .route("/check/", get(missing_domain_handler))
        .route("/history/{domain}", get(history_handler))
        .route("/history/", get(missing_domain_handler))
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ApiState, shutdown: F) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))
}

/// Binds `host:port` and serves the API until Ctrl+C.
pub async fn start_server(host: &str, port: u16, state: ApiState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(format!("{}:{}", host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}:{}: {}", host, port, e))?;

    log::info!("Server listening on http://{}:{}/", host, port);
    log::info!("Endpoints:");
    log::info!("  GET /check/{{domain}}");
    log::info!("  GET /history/{{domain}}?limit=N");

    serve(listener, state, shutdown_signal()).await
}
