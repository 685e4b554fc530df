//! Shared test utilities for `ApexPlanner`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::otb::{self, NewBudgetEntry},
    entities::{FiscalMonth, budget_otb, product, store},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test store with sensible defaults.
///
/// # Defaults
/// * `store_name`: "Store <id>"
/// * `region`: "Lima"
/// * all other attributes: None
pub async fn create_test_store(db: &DatabaseConnection, store_id: &str) -> Result<store::Model> {
    store::ActiveModel {
        store_id: Set(store_id.to_string()),
        store_name: Set(format!("Store {store_id}")),
        region: Set(Some("Lima".to_string())),
        cluster: Set(None),
        store_type: Set(None),
        capacity: Set(None),
        opening_date: Set(None),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `initial_cost`: 45.0
/// * `retail_price`: 100.0
/// * `buy_qty_suggested_total`: 0
/// * descriptive attributes: None
pub async fn create_test_product(
    db: &DatabaseConnection,
    sku_id: &str,
    style_id: &str,
    dept_id: i32,
) -> Result<product::Model> {
    product::ActiveModel {
        sku_id: Set(sku_id.to_string()),
        style_id: Set(style_id.to_string()),
        vendor: Set(None),
        dept_id: Set(dept_id),
        gender: Set(None),
        color: Set(None),
        size: Set(None),
        initial_cost: Set(45.0),
        retail_price: Set(100.0),
        buy_qty_suggested_total: Set(0),
        is_core: Set(false),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a budget entry through the regular creation path.
pub async fn create_test_budget_entry(
    db: &DatabaseConnection,
    fiscal_month: FiscalMonth,
    fiscal_year: i32,
    dept_id: i32,
    allocated_receipts: f64,
) -> Result<budget_otb::Model> {
    otb::create_budget_entry(
        db,
        NewBudgetEntry {
            fiscal_year,
            fiscal_month,
            dept_id,
            allocated_receipts,
            based_on_cogs_ly: None,
            otb_status: None,
        },
    )
    .await
}
