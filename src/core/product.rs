//! Product business logic - Queries over the product master.
//!
//! Products are reference data loaded in bulk; the service only reads them.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;
use tracing::{debug, instrument};

/// Products (styles) of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    /// Department the listing is for
    pub dept_id: i32,
    /// Number of products in `styles`
    pub product_count: usize,
    /// The products, ordered by SKU
    pub styles: Vec<product::Model>,
}

/// Lists every product of a department, ordered by SKU.
///
/// # Errors
/// Returns `NotFound` if the department has no products, or a database error if the
/// query fails.
#[instrument(skip(db))]
pub async fn list_products(db: &DatabaseConnection, dept_id: i32) -> Result<ProductListing> {
    let styles = Product::find()
        .filter(product::Column::DeptId.eq(dept_id))
        .order_by_asc(product::Column::SkuId)
        .all(db)
        .await?;

    if styles.is_empty() {
        return Err(Error::not_found(format!(
            "No styles found for department {dept_id}."
        )));
    }

    debug!(count = styles.len(), "Listed products");
    Ok(ProductListing {
        dept_id,
        product_count: styles.len(),
        styles,
    })
}
