//! HTTP server lifecycle.
//!
//! Binds the configured address, mounts `api_router()` and serves until
//! the shutdown future resolves.

use std::future::Future;

use crate::api::router::api_router;
use crate::api::types::AppContext;
use crate::config::ServerConfig;
use crate::Result;

/// Serve the API until `shutdown` completes.
///
/// # Errors
/// Returns `LifeBeatError::Io` if the listener cannot be bound or the
/// server fails while running.
pub async fn serve<F>(config: &ServerConfig, ctx: AppContext, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, "LifeBeat API listening");

    axum::serve(listener, api_router(ctx))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("LifeBeat API stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
