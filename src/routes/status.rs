//! Pod status endpoint.
//!
//! Reports where this replica is running (pod, node, namespace) along with a
//! timestamp, so a caller hitting a Service can see which pod answered.

use axum::{extract::State, Json};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::{PodIdentity, STATUS_LEVEL, STATUS_MESSAGE, STATUS_TYPE};
use crate::state::AppState;

/// Payload returned by the status endpoint. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub level: u8,
    #[serde(rename = "type")]
    pub kind: String,
    pub pod: String,
    pub node: String,
    pub namespace: String,
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl StatusRecord {
    pub fn new(identity: &PodIdentity, timestamp: DateTime<Local>) -> Self {
        Self {
            level: STATUS_LEVEL,
            kind: STATUS_TYPE.to_string(),
            pod: identity.pod.clone(),
            node: identity.node.clone(),
            namespace: identity.namespace.clone(),
            timestamp,
            message: STATUS_MESSAGE.to_string(),
        }
    }
}

/// Status handler.
///
/// Serves `/` and every path without a route of its own, for any method.
#[instrument(name = "status::status", skip(state))]
pub async fn status(State(state): State<AppState>) -> Json<StatusRecord> {
    Json(StatusRecord::new(&state.identity, Local::now()))
}
