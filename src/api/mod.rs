//! HTTP layer - JSON endpoints over the core services
//!
//! Handlers parse request input, call one core operation with the shared database
//! handle, and shape the JSON response. Errors become responses in [`error`].

/// Error-to-response mapping
pub mod error;
/// Request handlers grouped by resource
pub mod handlers;

use crate::config::PlanningConfig;
use crate::errors::{Error, Result};
use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared data available to all handlers.
/// Holds the database pool and the planning window used for OTB aggregation.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Fiscal year, OTB months and listing limits
    pub planning: Arc<PlanningConfig>,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection and planning settings.
    #[must_use]
    pub fn new(database: DatabaseConnection, planning: PlanningConfig) -> Self {
        Self {
            database,
            planning: Arc::new(planning),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::general::health))
        .route("/otb", get(handlers::otb::get_otb_summary))
        .route("/otb_budget", post(handlers::otb::create_budget_entry))
        .route("/products", get(handlers::product::list_products))
        .route("/stores", get(handlers::store::list_stores))
        .route("/planning", post(handlers::planning::submit_plan))
        .route(
            "/transactions",
            get(handlers::sales::list_sales).post(handlers::sales::ingest_sales),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deserializes a raw JSON request body into a typed input.
///
/// The body is read regardless of `Content-Type`. Malformed JSON and shape errors are
/// both reported as `BadRequest`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| Error::bad_request(format!("Invalid request body: {e}")))
}
