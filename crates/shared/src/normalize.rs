//! Turns loosely-typed dataset records into [`ServiceCenter`]s.
//!
//! Nothing here fails on a single record: absent or ill-typed fields fall back
//! to defaults. Only the document as a whole can be rejected.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::DataLoadError;
use crate::models::{CenterId, Position, ServiceCenter, Tag};

/// Parse the dataset document and normalize every record in it.
pub fn parse_dataset(text: &str) -> Result<Vec<ServiceCenter>, DataLoadError> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(records) = document else {
        return Err(DataLoadError::NotAnArray);
    };
    Ok(records
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize_center(raw, index))
        .collect())
}

/// Normalize one record. `index` is its 0-based position in the dataset.
pub fn normalize_center(raw: &Value, index: usize) -> ServiceCenter {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let id = match fields.get("id").and_then(Value::as_u64) {
        Some(id) => id,
        None => {
            let id = index as CenterId + 1;
            tracing::debug!(index, id, "record has no usable id, using position");
            id
        }
    };

    let position = match fields.get("position") {
        Some(value @ Value::Object(_)) => {
            Position::deserialize(value).unwrap_or_else(|e| {
                tracing::debug!(id, error = %e, "malformed position, centering marker");
                Position::default()
            })
        }
        _ => {
            tracing::debug!(id, "record has no position, centering marker");
            Position::default()
        }
    };

    ServiceCenter {
        id,
        brand_name: text(fields, "brandName").unwrap_or_default(),
        service_center: text(fields, "serviceCenter").unwrap_or_default(),
        full_address: text(fields, "fullAddress"),
        city: text(fields, "city"),
        state: text(fields, "state"),
        zip: text(fields, "zip"),
        region: tag(fields, "region"),
        branch_number: tag(fields, "branchNumber"),
        services: services(fields),
        is_support_center: fields.get("isSupportCenter").is_some_and(truthy),
        position,
    }
}

fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn tag(fields: &Map<String, Value>, key: &str) -> Option<Tag> {
    match fields.get(key)? {
        Value::Null => None,
        value => Tag::deserialize(value).ok(),
    }
}

fn services(fields: &Map<String, Value>) -> Vec<String> {
    match fields.get("services") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Loose boolean coercion: `null`, `false`, `0`, and `""` are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
