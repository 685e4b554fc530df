//! Product entity - Master data for a sellable SKU.
//!
//! The primary key is the style-color-size composite SKU. Products share `dept_id`
//! with budget entries as a loose grouping key, not a formal relation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Style-color-size identifier (e.g., "RUN100-BLK-42")
    #[sea_orm(primary_key, auto_increment = false)]
    pub sku_id: String,
    /// Style the SKU belongs to
    pub style_id: String,
    /// Supplying vendor
    pub vendor: Option<String>,
    /// Merchandise department
    pub dept_id: i32,
    /// Target gender segment
    pub gender: Option<String>,
    /// Color name or code
    pub color: Option<String>,
    /// Size label
    pub size: Option<String>,
    /// Unit cost in dollars
    pub initial_cost: f64,
    /// Full retail price in dollars
    pub retail_price: f64,
    /// Suggested total buy quantity across stores
    #[serde(default)]
    pub buy_qty_suggested_total: i32,
    /// Whether the style is a core (never-out-of-stock) item
    #[serde(default)]
    pub is_core: bool,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product has many sales
    #[sea_orm(has_many = "super::transaction_sale::Entity")]
    Sales,
}

impl Related<super::transaction_sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
