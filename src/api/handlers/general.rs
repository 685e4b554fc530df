//! Service-level endpoints.

use axum::Json;
use serde_json::{Value, json};

/// GET / - Health check
pub async fn health() -> Json<Value> {
    Json(json!({ "message": "API is running." }))
}
