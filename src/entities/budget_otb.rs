//! Budget OTB entity - Open-to-buy receipts allocated to a department for one fiscal month.
//!
//! The primary key is the composite `"<MONTH>-<YEAR>-<DEPT>"` (e.g., `"JAN-2026-100"`),
//! so there is at most one entry per department, month and year.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fiscal month, stored as its three-letter uppercase code.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum FiscalMonth {
    #[sea_orm(string_value = "JAN")]
    Jan,
    #[sea_orm(string_value = "FEB")]
    Feb,
    #[sea_orm(string_value = "MAR")]
    Mar,
    #[sea_orm(string_value = "APR")]
    Apr,
    #[sea_orm(string_value = "MAY")]
    May,
    #[sea_orm(string_value = "JUN")]
    Jun,
    #[sea_orm(string_value = "JUL")]
    Jul,
    #[sea_orm(string_value = "AUG")]
    Aug,
    #[sea_orm(string_value = "SEP")]
    Sep,
    #[sea_orm(string_value = "OCT")]
    Oct,
    #[sea_orm(string_value = "NOV")]
    Nov,
    #[sea_orm(string_value = "DEC")]
    Dec,
}

impl FiscalMonth {
    /// Three-letter code used in storage and in composite identifiers.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Jan => "JAN",
            Self::Feb => "FEB",
            Self::Mar => "MAR",
            Self::Apr => "APR",
            Self::May => "MAY",
            Self::Jun => "JUN",
            Self::Jul => "JUL",
            Self::Aug => "AUG",
            Self::Sep => "SEP",
            Self::Oct => "OCT",
            Self::Nov => "NOV",
            Self::Dec => "DEC",
        }
    }
}

impl std::fmt::Display for FiscalMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Budget OTB database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_otb")]
pub struct Model {
    /// Composite identifier `"<MONTH>-<YEAR>-<DEPT>"`
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Fiscal year (e.g., 2026)
    pub fiscal_year: i32,
    /// Fiscal month within the year
    pub fiscal_month: FiscalMonth,
    /// Merchandise department
    pub dept_id: i32,
    /// Receipts budget allocated to the department for the month, in dollars
    pub allocated_receipts: f64,
    /// Last year's cost of goods sold used as the planning baseline
    pub based_on_cogs_ly: Option<f64>,
    /// Workflow status of the entry (e.g., "draft", "approved")
    pub otb_status: Option<String>,
}

/// `BudgetOtb` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
