//! Store entity - Master data for a physical retail location.
//!
//! Stores are reference data created by bulk load and never mutated by the service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Store database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    /// External store code (e.g., "S001")
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: String,
    /// Display name of the store
    pub store_name: String,
    /// Geographic region or city
    pub region: Option<String>,
    /// Planning cluster the store is grouped into
    pub cluster: Option<String>,
    /// Format of the store (e.g., "flagship", "outlet")
    pub store_type: Option<String>,
    /// Selling capacity in units
    pub capacity: Option<i32>,
    /// Date the store opened
    pub opening_date: Option<Date>,
}

/// Defines relationships between Store and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One store has many sales
    #[sea_orm(has_many = "super::transaction_sale::Entity")]
    Sales,
}

impl Related<super::transaction_sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sales.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
