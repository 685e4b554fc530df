//! Sales endpoints - Transaction history and batch ingestion.

use crate::{
    api::{AppState, decode_body},
    core::sales::{self, NewSale, SalesFilter, SalesListing},
    errors::Result,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

/// GET /transactions?style=&store=&limit= - Sales history
pub async fn list_sales(
    State(state): State<AppState>,
    filter: std::result::Result<Query<SalesFilter>, QueryRejection>,
) -> Result<Json<SalesListing>> {
    let Query(filter) = filter?;
    let listing = sales::list_sales(
        &state.database,
        &filter,
        state.planning.transaction_list_limit,
    )
    .await?;
    Ok(Json(listing))
}

/// POST /transactions - Ingest a batch of sales
pub async fn ingest_sales(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let batch: Vec<NewSale> = decode_body(&body)?;
    let count = sales::ingest_sales(&state.database, batch).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": format!("Successfully ingested {count} sales records."),
            "ingested": count,
        })),
    ))
}
