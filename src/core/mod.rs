//! Core business logic, independent of the HTTP layer.
//!
//! Every operation takes the store handle explicitly as `&DatabaseConnection`.

/// OTB budget aggregation and budget entry creation
pub mod otb;
/// Planned buy quantity submission
pub mod planning;
/// Product master queries
pub mod product;
/// Sales transaction queries and batch ingestion
pub mod sales;
/// Store master queries
pub mod store;

use crate::errors::Error;
use sea_orm::{DbErr, SqlErr};

/// Classifies a failed insert of the record identified by `id`.
///
/// Constraint violations reported by the store become typed errors; anything else
/// is passed through as a database error.
pub(crate) fn classify_insert_error(err: DbErr, id: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::DuplicateKey { id: id.to_string() },
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Error::bad_request(format!(
            "Record '{id}' references an unknown store or product"
        )),
        _ => Error::Database(err),
    }
}
