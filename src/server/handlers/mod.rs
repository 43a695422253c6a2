//! HTTP handlers for the server.

pub mod print;

use axum::Json;
use serde_json::{Value, json};

/// Handle GET /health - liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({"ok": true}))
}
