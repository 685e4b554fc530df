//! Store business logic - Queries over the store master.

use crate::{
    entities::{Store, store},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;
use tracing::instrument;

/// All stores in the master.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreListing {
    /// Number of stores in `stores`
    pub store_count: usize,
    /// The stores, ordered by store id
    pub stores: Vec<store::Model>,
}

/// Lists every store ordered by store id. An empty master is not an error.
#[instrument(skip(db))]
pub async fn list_stores(db: &DatabaseConnection) -> Result<StoreListing> {
    let stores = Store::find()
        .order_by_asc(store::Column::StoreId)
        .all(db)
        .await?;

    Ok(StoreListing {
        store_count: stores.len(),
        stores,
    })
}
