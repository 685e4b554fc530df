//! Planning endpoint - Acknowledges planned buy quantities.

use crate::{api::decode_body, core::planning, errors::Result};
use axum::{Json, body::Bytes, http::StatusCode, response::IntoResponse};
use serde_json::Value;

/// POST /planning - Validate and acknowledge planned quantities.
///
/// Takes no state: planned quantities are not persisted.
pub async fn submit_plan(body: Bytes) -> Result<impl IntoResponse> {
    let payload: Value = decode_body(&body)?;
    let entries = planning::parse_plan(payload)?;
    let ack = planning::submit_plan(&entries);
    Ok((StatusCode::CREATED, Json(ack)))
}
