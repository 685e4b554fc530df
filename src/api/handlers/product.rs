//! Product endpoint - Product master listing by department.

use super::DeptParams;
use crate::{
    api::AppState,
    core::{
        otb::parse_dept_id,
        product::{self, ProductListing},
    },
    errors::Result,
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /products?dept=<int> - Products of a department
pub async fn list_products(
    State(state): State<AppState>,
    params: std::result::Result<Query<DeptParams>, QueryRejection>,
) -> Result<Json<ProductListing>> {
    let Query(params) = params?;
    let dept_id = parse_dept_id(params.dept.as_deref())?;
    let listing = product::list_products(&state.database, dept_id).await?;
    Ok(Json(listing))
}
