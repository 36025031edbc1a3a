//! kube-status: a pod status service for Kubernetes.
//!
//! This is the application entry point. It reads configuration from the
//! environment, initializes tracing, builds the Axum router and serves it
//! until the listener fails.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kube_status::config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};
use kube_status::{create_router, http, AppConfig, AppState};

fn init_tracing(logging: &LoggingConfig) {
    // RUST_LOG wins over the built-in default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before tracing so the log format is known
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging);

    if let Some(rejected) = &config.logging.rejected_format {
        tracing::warn!(value = %rejected, "Unknown LOG_FORMAT, using text");
    }

    tracing::info!(
        pod = %config.identity.pod,
        node = %config.identity.node,
        namespace = %config.identity.namespace,
        "Loaded configuration"
    );

    let state = AppState::new(config.identity.clone());
    let app = create_router(state);

    match http::start_server(app, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
