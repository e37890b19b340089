use crate::domain::model::{cell_text, OutputRecord, SkippedRecord, SourceRecord, TransformResult};
use crate::utils::error::{ConvertError, Result};
use serde::Deserialize;
use serde_json::Value;

fn record_name(item: &Value) -> String {
    match item.get("name") {
        None | Some(Value::Null) => "Unknown".to_string(),
        Some(name) => cell_text(name),
    }
}

fn record_error(item: &Value, reason: impl Into<String>) -> ConvertError {
    ConvertError::Record {
        name: record_name(item),
        reason: reason.into(),
    }
}

/// Maps one login entry. Absent or `null` fields become empty strings and
/// other scalars are stringified. Only an entry that is not an object, or a
/// `login` that is not an object, is a `Record` error naming the entry.
pub fn map_record(item: &Value) -> Result<OutputRecord> {
    if !item.is_object() {
        return Err(record_error(item, "item is not an object"));
    }
    match item.get("login") {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(_) => return Err(record_error(item, "login is not an object")),
    }

    SourceRecord::deserialize(item)
        .map(OutputRecord::from)
        .map_err(|e| record_error(item, e.to_string()))
}

/// Maps every entry, collecting the ones that could not be converted instead
/// of stopping at the first.
pub fn map_records(items: &[Value]) -> TransformResult {
    let mut result = TransformResult::default();

    for item in items {
        match map_record(item) {
            Ok(record) => result.records.push(record),
            Err(ConvertError::Record { name, reason }) => {
                tracing::debug!("Skipping item '{}': {}", name, reason);
                result.skipped.push(SkippedRecord { name, reason });
            }
            Err(other) => result.skipped.push(SkippedRecord {
                name: record_name(item),
                reason: other.to_string(),
            }),
        }
    }

    result
}
