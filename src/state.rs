//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::PodIdentity;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds only the pod identity captured at startup. Handlers read it and never
/// write, so concurrent requests need no coordination.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub identity: Arc<PodIdentity>,
}

impl AppState {
    /// Creates a new application state from the pod identity.
    pub fn new(identity: PodIdentity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}
