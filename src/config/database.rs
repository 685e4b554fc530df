//! Database configuration module for `ApexPlanner`.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs without hand-written SQL.

use crate::entities::{BudgetOtb, Product, Store, TransactionSale};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Opens a connection pool to the database at `database_url`.
///
/// The returned handle is cloned into request state and passed explicitly to every
/// service call; it is closed by the caller on shutdown.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    let db = Database::connect(database_url).await?;
    info!("Database connection opened");
    Ok(db)
}

/// Creates all tables that do not exist yet.
///
/// Tables are created in dependency order so that the foreign keys on
/// `transactions_sales` can reference `stores` and `products`.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let tables = [
        schema.create_table_from_entity(Store),
        schema.create_table_from_entity(Product),
        schema.create_table_from_entity(BudgetOtb),
        schema.create_table_from_entity(TransactionSale),
    ];

    for mut table in tables {
        table.if_not_exists();
        db.execute(builder.build(&table)).await?;
    }

    debug!("Ensured all tables exist");
    Ok(())
}
