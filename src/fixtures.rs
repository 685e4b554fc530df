//! Fixture normalizer - Reshapes flat JSON exports into loadable fixture records.
//!
//! Each export is an array of flat objects. Every object becomes
//! `{"model": <model>, "pk": <id>, "fields": {<remaining attributes>}}`, where the id is
//! taken from the `_id` attribute when present and otherwise is the 1-based position
//! of the object in the array. Files are rewritten in place.
//!
//! Running the normalizer on its own output is not supported: already-wrapped records
//! would be wrapped again.

use crate::config::FixtureMapping;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{error, info, instrument};

/// Attribute holding the external identifier in flat exports.
pub const ID_FIELD: &str = "_id";

/// One record in loader format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureRecord {
    /// Target model label (e.g., "api.budgetotb")
    pub model: String,
    /// Primary key, either the exported `_id` verbatim or the 1-based position
    pub pk: Value,
    /// Every attribute except the identifier, in export order
    pub fields: Map<String, Value>,
}

/// Outcome of normalizing a set of files.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixtureReport {
    /// Files rewritten, with the number of records in each
    pub transformed: Vec<(String, usize)>,
    /// Files that could not be processed, with the reason
    pub failed: Vec<(String, String)>,
}

/// Wraps flat records as fixture records for `model`.
///
/// # Errors
/// Returns `Fixture` if an element is not a JSON object.
pub fn normalize_records(model: &str, records: Vec<Value>) -> Result<Vec<FixtureRecord>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let Value::Object(attributes) = record else {
                return Err(Error::Fixture {
                    message: format!("record {} is not a JSON object", index + 1),
                });
            };

            let mut pk = None;
            let mut fields = Map::with_capacity(attributes.len());
            for (key, value) in attributes {
                if key == ID_FIELD {
                    pk = Some(value);
                } else {
                    fields.insert(key, value);
                }
            }

            Ok(FixtureRecord {
                model: model.to_string(),
                pk: pk.unwrap_or_else(|| Value::from(index + 1)),
                fields,
            })
        })
        .collect()
}

/// Normalizes the export at `path` in place and returns the number of records written.
///
/// # Errors
/// Returns an error if the file cannot be read or written, is not valid JSON, is not a
/// JSON array, or contains a non-object element.
#[instrument]
pub fn transform_file(path: &Path, model: &str) -> Result<usize> {
    let contents = std::fs::read_to_string(path)?;
    let Value::Array(records) = serde_json::from_str::<Value>(&contents)? else {
        return Err(Error::Fixture {
            message: format!("{} does not contain a JSON array", path.display()),
        });
    };

    let fixtures = normalize_records(model, records)?;
    std::fs::write(path, serde_json::to_string_pretty(&fixtures)?)?;

    info!("Transformed {} records into {}", fixtures.len(), model);
    Ok(fixtures.len())
}

/// Normalizes every mapped file under `dir`.
///
/// A failing file is logged and recorded in the report; the remaining files are still
/// processed.
pub fn transform_all(dir: &Path, mappings: &[FixtureMapping]) -> FixtureReport {
    let mut report = FixtureReport::default();

    for mapping in mappings {
        let path = dir.join(&mapping.file);
        info!("Processing {} -> {}", mapping.file, mapping.model);

        match transform_file(&path, &mapping.model) {
            Ok(count) => report.transformed.push((mapping.file.clone(), count)),
            Err(e) => {
                error!("Failed to transform {}: {}", path.display(), e);
                report.failed.push((mapping.file.clone(), e.to_string()));
            }
        }
    }

    report
}
