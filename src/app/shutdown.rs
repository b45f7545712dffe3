//! Graceful shutdown handling.

use log::{info, warn};

/// Resolves when the process receives Ctrl+C.
///
/// Used as the HTTP server's graceful shutdown trigger. If the signal handler
/// cannot be installed the future never resolves and the server runs until
/// killed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
