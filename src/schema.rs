//! Top-level shape checks for raw flow-map documents.
//!
//! Rules are applied in a fixed order and the first failure wins:
//!
//! 1. the document is a JSON object,
//! 2. `screens` is a non-empty array,
//! 3. `transitions` is an array (possibly empty),
//! 4. `start_screen` is a non-empty string.
//!
//! Whether `start_screen` or any transition endpoint names a declared screen is
//! not checked here; see [`crate::graph`].

use crate::error::SchemaError;
use crate::flow::{ScreenEntry, TransitionEntry, ValidatedFlowMap};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Validates a parsed document and decodes it into a [`ValidatedFlowMap`].
pub fn validate(document: &Value) -> Result<ValidatedFlowMap, SchemaError> {
    let object = document.as_object().ok_or(SchemaError::NotAnObject {
        found: json_kind(document),
    })?;

    let screens = match object.get("screens") {
        Some(Value::Array(items)) if items.is_empty() => return Err(SchemaError::EmptyScreens),
        Some(Value::Array(items)) => items,
        _ => return Err(SchemaError::MissingScreens),
    };

    let Some(Value::Array(transitions)) = object.get("transitions") else {
        return Err(SchemaError::MissingTransitions);
    };

    let start_screen = match object.get("start_screen") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err(SchemaError::MissingStartScreen),
    };

    let screens: Vec<ScreenEntry> = decode_entries("screens", screens)?;
    let transitions: Vec<TransitionEntry> = decode_entries("transitions", transitions)?;

    debug!(
        screens = screens.len(),
        transitions = transitions.len(),
        start_screen = %start_screen,
        "flow map passed schema validation"
    );

    Ok(ValidatedFlowMap {
        flow_name: label(object.get("flow_name")),
        platform: label(object.get("platform")),
        start_screen,
        screens,
        transitions,
    })
}

/// Decodes each array element, reporting the first one whose fields have the wrong type.
fn decode_entries<T: DeserializeOwned>(
    field: &'static str,
    items: &[Value],
) -> Result<Vec<T>, SchemaError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(SchemaError::MalformedEntry {
                    field,
                    index,
                    message: format!("expected an object, found {}", json_kind(item)),
                });
            }
            serde_json::from_value(item.clone()).map_err(|e| SchemaError::MalformedEntry {
                field,
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

// Display labels are informational only; anything that is not a string is treated as absent.
fn label(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rules_short_circuit_in_order() {
        // Both screens and start_screen are wrong; the screens rule is reported first.
        let doc = json!({ "screens": [], "transitions": [] });
        assert_eq!(validate(&doc), Err(SchemaError::EmptyScreens));

        let doc = json!({ "screens": [{ "id": "a", "image": "a.png" }], "start_screen": "" });
        assert_eq!(validate(&doc), Err(SchemaError::MissingTransitions));
    }

    #[test]
    fn test_non_object_documents_are_rejected() {
        for (doc, kind) in [
            (json!(null), "null"),
            (json!(7), "a number"),
            (json!("flow"), "a string"),
            (json!([]), "an array"),
        ] {
            assert_eq!(validate(&doc), Err(SchemaError::NotAnObject { found: kind }));
        }
    }

    #[test]
    fn test_non_string_labels_are_dropped() {
        let doc = json!({
            "flow_name": 12,
            "platform": "ios",
            "start_screen": "a",
            "screens": [{ "id": "a", "image": "a.png" }],
            "transitions": []
        });
        let validated = validate(&doc).expect("document should validate");
        assert_eq!(validated.flow_name, None);
        assert_eq!(validated.platform.as_deref(), Some("ios"));
    }
}
