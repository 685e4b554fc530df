//! Sales business logic - Queries and batch ingestion of sales transactions.
//!
//! Sales reference a store and a product through enforced foreign keys. A batch is
//! ingested atomically: either every record is stored or none is.

use crate::{
    entities::{TransactionSale, product, transaction_sale},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{JoinType, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Optional filters for listing sales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SalesFilter {
    /// Only sales of SKUs belonging to this style
    pub style: Option<String>,
    /// Only sales made in this store
    pub store: Option<String>,
    /// Maximum number of sales to return
    pub limit: Option<u64>,
}

impl SalesFilter {
    /// Row limit to apply. Unfiltered listings always get `default_limit` unless an
    /// explicit limit was requested; filtered listings are unbounded by default.
    #[must_use]
    pub fn effective_limit(&self, default_limit: u64) -> Option<u64> {
        if self.limit.is_some() {
            return self.limit;
        }
        if self.style.is_none() && self.store.is_none() {
            Some(default_limit)
        } else {
            None
        }
    }
}

/// A page of sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesListing {
    /// Number of sales in `transactions`
    pub transaction_count: usize,
    /// The sales, ordered by date then transaction id
    pub transactions: Vec<transaction_sale::Model>,
}

/// A sale record submitted for ingestion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSale {
    /// External transaction line identifier
    pub transaction_id: String,
    /// Store where the sale happened
    pub store_id: String,
    /// SKU that was sold
    pub sku_id: String,
    /// Business date (`YYYY-MM-DD`)
    pub transaction_date: NaiveDate,
    /// Units sold
    pub sales_units: i32,
    /// Full retail price per unit
    pub retail_price: f64,
    /// Discount as a fraction
    #[serde(default)]
    pub discount_pct: f64,
    /// Net revenue for the line
    pub final_price: f64,
    /// Cost of goods for the line
    pub cost: f64,
    /// Gross margin dollars; derived as `final_price - cost` when absent
    pub gm_dollars: Option<f64>,
}

impl NewSale {
    fn validate(&self) -> Result<()> {
        if self.sales_units < 0 {
            return Err(Error::bad_request(format!(
                "Sale '{}' has negative sales_units",
                self.transaction_id
            )));
        }

        let amounts = [
            self.retail_price,
            self.discount_pct,
            self.final_price,
            self.cost,
            self.gm_dollars.unwrap_or_default(),
        ];
        if amounts.iter().any(|amount| !amount.is_finite()) {
            return Err(Error::bad_request(format!(
                "Sale '{}' has a non-finite amount",
                self.transaction_id
            )));
        }

        Ok(())
    }

    fn into_active_model(self) -> transaction_sale::ActiveModel {
        let gm_dollars = self.gm_dollars.unwrap_or(self.final_price - self.cost);
        transaction_sale::ActiveModel {
            transaction_id: Set(self.transaction_id),
            store_id: Set(self.store_id),
            sku_id: Set(self.sku_id),
            transaction_date: Set(self.transaction_date),
            sales_units: Set(self.sales_units),
            retail_price: Set(self.retail_price),
            discount_pct: Set(self.discount_pct),
            final_price: Set(self.final_price),
            cost: Set(self.cost),
            gm_dollars: Set(gm_dollars),
        }
    }
}

/// Lists sales matching `filter`, ordered by date then transaction id.
///
/// The style filter joins through the product master, since sales reference SKUs.
#[instrument(skip(db))]
pub async fn list_sales(
    db: &DatabaseConnection,
    filter: &SalesFilter,
    default_limit: u64,
) -> Result<SalesListing> {
    let mut query = TransactionSale::find();

    if let Some(style) = &filter.style {
        query = query
            .join(JoinType::InnerJoin, transaction_sale::Relation::Product.def())
            .filter(product::Column::StyleId.eq(style.as_str()));
    }
    if let Some(store) = &filter.store {
        query = query.filter(transaction_sale::Column::StoreId.eq(store.as_str()));
    }

    query = query
        .order_by_asc(transaction_sale::Column::TransactionDate)
        .order_by_asc(transaction_sale::Column::TransactionId);
    if let Some(limit) = filter.effective_limit(default_limit) {
        query = query.limit(limit);
    }

    let transactions = query.all(db).await?;
    debug!(count = transactions.len(), "Listed sales");

    Ok(SalesListing {
        transaction_count: transactions.len(),
        transactions,
    })
}

/// Validates and stores a batch of sales in a single database transaction.
///
/// Returns the number of records stored. An empty batch stores nothing and succeeds.
///
/// # Errors
/// Returns:
/// - `BadRequest` if a record fails validation or references an unknown store or product
/// - `DuplicateKey` if a transaction id already exists
/// - a database error for any other store failure
#[instrument(skip(db, sales), fields(batch_size = sales.len()))]
pub async fn ingest_sales(db: &DatabaseConnection, sales: Vec<NewSale>) -> Result<usize> {
    if sales.is_empty() {
        return Ok(0);
    }

    for sale in &sales {
        sale.validate()?;
    }

    let count = sales.len();
    let txn = db.begin().await?;

    // Insert one by one so a constraint failure names the offending record
    for sale in sales {
        let id = sale.transaction_id.clone();
        TransactionSale::insert(sale.into_active_model())
            .exec_without_returning(&txn)
            .await
            .map_err(|e| super::classify_insert_error(e, &id))?;
    }

    txn.commit().await?;
    info!("Ingested {} sales records", count);
    Ok(count)
}
