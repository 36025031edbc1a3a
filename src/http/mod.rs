//! HTTP server module.
//!
//! Plain HTTP only. The server runs until the listener fails; there is no
//! graceful shutdown, the orchestrator restarts the container instead.

mod server;

pub use server::{bind, serve, start_server, ServerError};
