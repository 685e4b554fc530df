//! Sale transaction entity - One line of point-of-sale history.
//!
//! Each sale references the store it happened in and the SKU that was sold.
//! Sales are immutable once ingested.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sale transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions_sales")]
pub struct Model {
    /// External transaction line identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub transaction_id: String,
    /// Store where the sale happened
    pub store_id: String,
    /// SKU that was sold
    pub sku_id: String,
    /// Business date of the sale
    pub transaction_date: Date,
    /// Units sold
    pub sales_units: i32,
    /// Full retail price per unit
    pub retail_price: f64,
    /// Markdown or promotional discount as a fraction (0.25 = 25% off)
    pub discount_pct: f64,
    /// Net revenue for the line after discount
    pub final_price: f64,
    /// Cost of goods for the line
    pub cost: f64,
    /// Gross margin dollars (`final_price - cost`)
    pub gm_dollars: f64,
}

/// Defines relationships between a sale and master data
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each sale belongs to one store
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::StoreId"
    )]
    Store,
    /// Each sale belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::SkuId",
        to = "super::product::Column::SkuId"
    )]
    Product,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
