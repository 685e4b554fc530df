//! OTB endpoints - Department summaries and budget entry creation.

use super::DeptParams;
use crate::{
    api::{AppState, decode_body},
    core::otb::{self, NewBudgetEntry, OtbSummary},
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

/// GET /otb?dept=<int> - OTB total and monthly breakdown for a department
pub async fn get_otb_summary(
    State(state): State<AppState>,
    params: std::result::Result<Query<DeptParams>, QueryRejection>,
) -> Result<Json<OtbSummary>> {
    let Query(params) = params?;
    let dept_id = otb::parse_dept_id(params.dept.as_deref())?;
    let summary = otb::get_otb_summary(
        &state.database,
        dept_id,
        state.planning.fiscal_year,
        &state.planning.otb_months,
    )
    .await?;

    Ok(Json(summary))
}

/// POST /otb_budget - Create a budget entry under its composite id
pub async fn create_budget_entry(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let entry: NewBudgetEntry = decode_body(&body)?;
    let created = otb::create_budget_entry(&state.database, entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "id": created.id })),
    ))
}
