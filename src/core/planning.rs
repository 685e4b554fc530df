//! Planning submission - Accepts planned buy quantities per style.
//!
//! Submissions are validated and acknowledged but not stored: there is no planning
//! table yet, so nothing here touches the database. A durable write path needs its
//! own storage shape and is not implied by this acknowledgment.

use crate::errors::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

const INVALID_PLAN_MESSAGE: &str =
    "Invalid data format. Expected a list of objects with 'style_id' and 'planned_qty'.";

const STYLE_FIELD: &str = "style_id";
const QUANTITY_FIELD: &str = "planned_qty";

/// Number of submitted entries echoed back in the acknowledgment.
pub const PREVIEW_LEN: usize = 2;

/// One submitted plan row, kept exactly as received.
///
/// Only the presence of `style_id` and `planned_qty` is guaranteed; their values and
/// any extra attributes are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlanEntry(Map<String, Value>);

impl PlanEntry {
    /// The submitted `style_id` value
    #[must_use]
    pub fn style_id(&self) -> &Value {
        &self.0[STYLE_FIELD]
    }

    /// The submitted `planned_qty` value
    #[must_use]
    pub fn planned_qty(&self) -> &Value {
        &self.0[QUANTITY_FIELD]
    }
}

/// Response to an accepted plan submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanAcknowledgment {
    /// Always `true` for an accepted submission
    pub success: bool,
    /// Human-readable summary including the processed count
    pub message: String,
    /// The first [`PREVIEW_LEN`] entries as received
    pub received_data_preview: Vec<PlanEntry>,
}

/// Checks that `payload` is a list of objects carrying `style_id` and `planned_qty`.
///
/// # Errors
/// Returns `BadRequest` if the payload is not an array or any element is not an object
/// with both keys.
pub fn parse_plan(payload: Value) -> Result<Vec<PlanEntry>> {
    let Value::Array(items) = payload else {
        debug!("Rejected plan submission: payload is not a list");
        return Err(Error::bad_request(INVALID_PLAN_MESSAGE));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields)
                if fields.contains_key(STYLE_FIELD) && fields.contains_key(QUANTITY_FIELD) =>
            {
                Ok(PlanEntry(fields))
            }
            _ => {
                debug!("Rejected plan submission: element {} is malformed", index);
                Err(Error::bad_request(INVALID_PLAN_MESSAGE))
            }
        })
        .collect()
}

/// Acknowledges a validated plan.
#[must_use]
pub fn submit_plan(entries: &[PlanEntry]) -> PlanAcknowledgment {
    let count = entries.len();
    info!("Processed {} planned styles", count);

    PlanAcknowledgment {
        success: true,
        message: format!("Successfully processed {count} planned styles."),
        received_data_preview: entries.iter().take(PREVIEW_LEN).cloned().collect(),
    }
}
