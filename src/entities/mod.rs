//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod budget_otb;
pub mod product;
pub mod store;
pub mod transaction_sale;

// Re-export specific types to avoid conflicts
pub use budget_otb::{
    Column as BudgetOtbColumn, Entity as BudgetOtb, FiscalMonth, Model as BudgetOtbModel,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use store::{Column as StoreColumn, Entity as Store, Model as StoreModel};
pub use transaction_sale::{
    Column as TransactionSaleColumn, Entity as TransactionSale, Model as TransactionSaleModel,
};
