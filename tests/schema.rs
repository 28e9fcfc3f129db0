//! Tests for top-level document validation.
mod common;
use common::*;
use flowwalk::prelude::*;
use serde_json::json;

#[test]
fn test_scenario_document_validates() {
    let validated = validate(&scenario_document()).expect("scenario should validate");
    assert_eq!(validated.start_screen, "home");
    assert_eq!(validated.screens.len(), 2);
    assert_eq!(validated.transitions.len(), 1);
    assert_eq!(validated.flow_name, None);
}

#[test]
fn test_missing_required_fields_fail() {
    let cases = [
        ("screens", SchemaError::MissingScreens),
        ("transitions", SchemaError::MissingTransitions),
        ("start_screen", SchemaError::MissingStartScreen),
    ];

    for (field, expected) in cases {
        let mut document = scenario_document();
        document.as_object_mut().unwrap().remove(field);
        assert_eq!(
            validate(&document),
            Err(expected),
            "removing '{}' should be rejected",
            field
        );
    }
}

#[test]
fn test_empty_screens_rejected_but_empty_transitions_allowed() {
    let document = json!({ "start_screen": "home", "screens": [], "transitions": [] });
    assert_eq!(validate(&document), Err(SchemaError::EmptyScreens));

    let document = json!({
        "start_screen": "home",
        "screens": [{ "id": "home", "image": "a.png" }],
        "transitions": []
    });
    assert!(validate(&document).is_ok());
}

#[test]
fn test_wrong_container_types_fail() {
    let document = json!({ "start_screen": "home", "screens": { "home": {} }, "transitions": [] });
    assert_eq!(validate(&document), Err(SchemaError::MissingScreens));

    let document = json!({
        "start_screen": "home",
        "screens": [{ "id": "home", "image": "a.png" }],
        "transitions": null
    });
    assert_eq!(validate(&document), Err(SchemaError::MissingTransitions));
}

#[test]
fn test_start_screen_must_be_non_empty_string() {
    for start in [json!(""), json!(3), json!(null), json!(["home"])] {
        let mut document = scenario_document();
        document["start_screen"] = start;
        assert_eq!(validate(&document), Err(SchemaError::MissingStartScreen));
    }
}

#[test]
fn test_start_screen_is_not_cross_checked() {
    let mut document = scenario_document();
    document["start_screen"] = json!("nowhere");
    assert!(validate(&document).is_ok());
}

#[test]
fn test_malformed_entries_name_the_field_and_position() {
    let mut document = scenario_document();
    document["transitions"] = json!([
        { "from_screen": "home", "to_screen": "detail", "trigger": "tap_card" },
        "not a transition"
    ]);
    match validate(&document) {
        Err(SchemaError::MalformedEntry { field, index, .. }) => {
            assert_eq!(field, "transitions");
            assert_eq!(index, 1);
        }
        other => panic!("expected a malformed entry error, got {:?}", other),
    }

    let mut document = scenario_document();
    document["screens"][0]["id"] = json!(42);
    assert!(matches!(
        validate(&document),
        Err(SchemaError::MalformedEntry { field: "screens", index: 0, .. })
    ));
}

#[test]
fn test_incomplete_hotspot_is_malformed() {
    let mut document = scenario_document();
    document["transitions"][0]["hotspot"] = json!({ "x": 1, "y": 2, "width": 3 });
    assert!(matches!(
        validate(&document),
        Err(SchemaError::MalformedEntry { field: "transitions", .. })
    ));
}

#[test]
fn test_extra_screen_fields_pass_through() {
    let document = shop_document();
    let validated = validate(&document).unwrap();
    assert_eq!(validated.screens[0].extra["notes"], json!("Landing page"));
    assert_eq!(validated.flow_name.as_deref(), Some("Shop"));
    assert_eq!(validated.platform.as_deref(), Some("ios"));
}

#[test]
fn test_validation_does_not_require_screen_ids() {
    // Presence of ids and images is the indexer's concern.
    let mut document = scenario_document();
    document["screens"][1] = json!({ "image": "b.png" });
    assert!(validate(&document).is_ok());
}
