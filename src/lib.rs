//! kube-status: reports which pod, node and namespace answered a request.
//!
//! Serves a JSON status record on `/` and a plaintext liveness probe on `/health`.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError, PodIdentity};
pub use routes::create_router;
pub use state::AppState;
