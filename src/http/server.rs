//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the TCP listener. Port 0 asks the OS for a free port.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the router on an already bound listener.
///
/// This function blocks until the server fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server fails.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(config.http.addr()).await?;
    tracing::info!(
        port = config.http.port,
        addr = %config.http.addr(),
        "Level 3 Kubernetes service starting"
    );
    serve(listener, app).await
}
