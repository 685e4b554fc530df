//! OTB business logic - Aggregates and creates open-to-buy budget entries.
//!
//! A department's OTB for the planning window is the sum of `allocated_receipts`
//! over the budget entries for the configured fiscal year and months. Entries are
//! insert-only; the composite id guarantees one entry per department, month and year.

use crate::{
    entities::{BudgetOtb, FiscalMonth, budget_otb},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Allocated receipts for a single fiscal month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAllocation {
    /// Month the receipts are allocated to
    pub fiscal_month: FiscalMonth,
    /// Allocated receipts in dollars
    pub allocated_receipts: f64,
}

/// Aggregated OTB for one department over the planning window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtbSummary {
    /// Department the summary is for
    pub dept_id: i32,
    /// Sum of allocated receipts, rounded to cents
    pub total_planned_otb: f64,
    /// One row per stored entry, in store order; months without an entry are absent
    pub monthly_breakdown: Vec<MonthlyAllocation>,
}

/// Input for creating a budget entry.
///
/// Identifier fields sent by clients (`_id`, `id`) are not part of this type and are
/// discarded on deserialization; the id is always derived.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBudgetEntry {
    /// Fiscal year
    pub fiscal_year: i32,
    /// Fiscal month
    pub fiscal_month: FiscalMonth,
    /// Merchandise department
    pub dept_id: i32,
    /// Allocated receipts in dollars
    pub allocated_receipts: f64,
    /// Last year's cost of goods baseline
    pub based_on_cogs_ly: Option<f64>,
    /// Workflow status
    pub otb_status: Option<String>,
}

impl NewBudgetEntry {
    /// Composite identifier this entry will be stored under.
    #[must_use]
    pub fn composite_id(&self) -> String {
        budget_entry_id(self.fiscal_month, self.fiscal_year, self.dept_id)
    }
}

/// Builds the `"<MONTH>-<YEAR>-<DEPT>"` identifier, e.g. `"JAN-2026-100"`.
#[must_use]
pub fn budget_entry_id(fiscal_month: FiscalMonth, fiscal_year: i32, dept_id: i32) -> String {
    format!("{fiscal_month}-{fiscal_year}-{dept_id}")
}

/// Parses the raw `dept` request parameter.
///
/// # Errors
/// Returns `BadRequest` if the value is missing, empty, or not an integer.
pub fn parse_dept_id(raw: Option<&str>) -> Result<i32> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(Error::bad_request("The 'dept' parameter is required."));
    }

    raw.parse()
        .map_err(|_| Error::bad_request("The 'dept' parameter must be an integer."))
}

/// Rounds a dollar amount to two decimal places, with exact halves going to the even cent.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}

/// Sums the allocated receipts of a department over the given fiscal year and months.
///
/// # Errors
/// Returns `NotFound` if no entry matches, or a database error if the query fails.
#[instrument(skip(db))]
pub async fn get_otb_summary(
    db: &DatabaseConnection,
    dept_id: i32,
    fiscal_year: i32,
    months: &[FiscalMonth],
) -> Result<OtbSummary> {
    let entries = BudgetOtb::find()
        .filter(budget_otb::Column::DeptId.eq(dept_id))
        .filter(budget_otb::Column::FiscalYear.eq(fiscal_year))
        .filter(budget_otb::Column::FiscalMonth.is_in(months.iter().copied()))
        .all(db)
        .await?;

    if entries.is_empty() {
        return Err(Error::not_found(format!(
            "No OTB data found for department {dept_id} in {fiscal_year}."
        )));
    }

    let total: f64 = entries.iter().map(|entry| entry.allocated_receipts).sum();
    debug!(entries = entries.len(), total, "Aggregated OTB entries");

    let monthly_breakdown = entries
        .into_iter()
        .map(|entry| MonthlyAllocation {
            fiscal_month: entry.fiscal_month,
            allocated_receipts: entry.allocated_receipts,
        })
        .collect();

    Ok(OtbSummary {
        dept_id,
        total_planned_otb: round_to_cents(total),
        monthly_breakdown,
    })
}

/// Inserts a new budget entry under its derived composite id.
///
/// # Errors
/// Returns:
/// - `BadRequest` if an amount is not finite
/// - `DuplicateKey` if an entry for the same month, year and department exists
/// - a database error for any other store failure
#[instrument(skip(db, entry), fields(id = %entry.composite_id()))]
pub async fn create_budget_entry(
    db: &DatabaseConnection,
    entry: NewBudgetEntry,
) -> Result<budget_otb::Model> {
    if !entry.allocated_receipts.is_finite() {
        return Err(Error::bad_request("'allocated_receipts' must be a finite number."));
    }
    if entry.based_on_cogs_ly.is_some_and(|cogs| !cogs.is_finite()) {
        return Err(Error::bad_request("'based_on_cogs_ly' must be a finite number."));
    }

    let id = entry.composite_id();
    let model = budget_otb::ActiveModel {
        id: Set(id.clone()),
        fiscal_year: Set(entry.fiscal_year),
        fiscal_month: Set(entry.fiscal_month),
        dept_id: Set(entry.dept_id),
        allocated_receipts: Set(entry.allocated_receipts),
        based_on_cogs_ly: Set(entry.based_on_cogs_ly),
        otb_status: Set(entry.otb_status),
    };

    let created = model
        .insert(db)
        .await
        .map_err(|e| super::classify_insert_error(e, &id))?;
    info!("Created budget entry {}", created.id);
    Ok(created)
}
