//! # Document Validation Pipeline
//!
//! Validates one event document and returns its ordered error list. The
//! pipeline short-circuits stage by stage but always records what failed:
//!
//! 1. parse as JSON,
//! 2. require a JSON object,
//! 3. check the `event` key (schema name),
//! 4. check the `data` key (payload),
//! 5. resolve the named schema against the registry,
//! 6. run schema conformance if everything before was clean.
//!
//! An empty result means the document is fully valid. Message order is
//! fixed: format error, structural errors, schema-name error, then the
//! conformance violations sorted by their string form.

use serde_json::Value;

use crate::registry::{SchemaEntry, SchemaRegistry};

/// The document could not be parsed as JSON.
pub const ERR_NOT_JSON: &str = "not valid JSON format";
/// The document parsed, but its top level is not a JSON object.
pub const ERR_NOT_OBJECT: &str = "must contain a JSON object";
/// The `event` key is missing or null.
pub const ERR_NO_SCHEMA_NAME: &str = "no schema specified for validation";
/// The `event` key is present but not a string.
pub const ERR_SCHEMA_NAME_TYPE: &str = "schema name must be a string";
/// The `data` key is missing or null.
pub const ERR_NO_DATA: &str = "no data specified for validation";
/// The named schema is not in the registry.
pub const ERR_UNKNOWN_SCHEMA: &str = "schema does not exist";
/// The named schema is in the registry but failed to load.
pub const ERR_CORRUPTED_SCHEMA: &str = "schema contains errors";

/// Validate one document's raw content against the registry.
///
/// Never fails: every problem becomes an error message in the returned
/// list, in detection order.
pub fn validate_document(raw: &str, registry: &SchemaRegistry) -> Vec<String> {
    let Ok(document) = serde_json::from_str::<Value>(raw) else {
        return vec![ERR_NOT_JSON.to_string()];
    };
    let Some(object) = document.as_object() else {
        return vec![ERR_NOT_OBJECT.to_string()];
    };

    let mut errors = Vec::new();

    // An explicit null is treated the same as an absent key for both
    // `event` and `data`.
    let schema_name = match object.get("event").filter(|v| !v.is_null()) {
        None => {
            errors.push(ERR_NO_SCHEMA_NAME.to_string());
            None
        }
        Some(value) => match value.as_str() {
            Some(name) => Some(name),
            None => {
                errors.push(ERR_SCHEMA_NAME_TYPE.to_string());
                None
            }
        },
    };

    let data = object.get("data").filter(|v| !v.is_null());
    if data.is_none() {
        errors.push(ERR_NO_DATA.to_string());
    }

    // A missing or misshapen `event` prevents resolution entirely.
    let Some(name) = schema_name else {
        return errors;
    };

    let validator = match registry.get(name) {
        None => {
            errors.push(ERR_UNKNOWN_SCHEMA.to_string());
            return errors;
        }
        Some(SchemaEntry::Invalid { .. }) => {
            errors.push(ERR_CORRUPTED_SCHEMA.to_string());
            return errors;
        }
        Some(SchemaEntry::Compiled(validator)) => validator,
    };

    // Conformance runs only when every earlier stage was clean.
    if let Some(data) = data {
        if errors.is_empty() {
            errors.extend(conformance_errors(validator, data));
        }
    }

    errors
}

/// Collect every conformance violation, sorted ascending by its string
/// form so repeated runs report violations in a stable order.
fn conformance_errors(validator: &jsonschema::Validator, data: &Value) -> Vec<String> {
    let mut messages: Vec<String> = validator
        .iter_errors(data)
        .map(|violation| violation.to_string())
        .collect();
    messages.sort();
    messages
}
