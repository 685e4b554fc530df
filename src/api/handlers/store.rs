//! Store endpoint - Store master listing.

use crate::{
    api::AppState,
    core::store::{self, StoreListing},
    errors::Result,
};
use axum::{Json, extract::State};

/// GET /stores - All stores
pub async fn list_stores(State(state): State<AppState>) -> Result<Json<StoreListing>> {
    let listing = store::list_stores(&state.database).await?;
    Ok(Json(listing))
}
