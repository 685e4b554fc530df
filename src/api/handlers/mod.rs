//! Request handlers, one module per resource.

/// Health check
pub mod general;
/// OTB summary and budget entry creation
pub mod otb;
/// Planned quantity submission
pub mod planning;
/// Product listing by department
pub mod product;
/// Sales listing and ingestion
pub mod sales;
/// Store listing
pub mod store;

use serde::Deserialize;

/// Query parameters carrying a department id.
///
/// `dept` is kept as raw text so that a missing and a malformed value can be reported
/// with different messages.
#[derive(Debug, Deserialize)]
pub struct DeptParams {
    /// Raw `dept` query parameter
    pub dept: Option<String>,
}
