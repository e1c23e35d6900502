//! Serde roundtrip and JsonSchema validation for catalog entities.

use schemars::schema_for;
use ccc_core::catalog::Catalog;
use ccc_core::entities::{Club, Event};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn sample_clubs_match_schema() {
    let schema = serde_json::to_value(schema_for!(Club)).unwrap();
    for club in Catalog::sample().clubs() {
        let instance = serde_json::to_value(club).unwrap();
        let errors = validate_against_schema(&schema, &instance);
        assert!(errors.is_empty(), "club {} failed: {errors:?}", club.id);

        let recovered: Club = serde_json::from_value(instance).unwrap();
        assert_eq!(&recovered, club);
    }
}

#[test]
fn sample_events_match_schema() {
    let schema = serde_json::to_value(schema_for!(Event)).unwrap();
    for event in Catalog::sample().events() {
        let instance = serde_json::to_value(event).unwrap();
        let errors = validate_against_schema(&schema, &instance);
        assert!(errors.is_empty(), "event {} failed: {errors:?}", event.id);

        let recovered: Event = serde_json::from_value(instance).unwrap();
        assert_eq!(&recovered, event);
    }
}

#[test]
fn event_wire_format() {
    let catalog = Catalog::sample();
    let event = &catalog.events()[1];
    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["id"], "ml-workshop");
    assert_eq!(json["club_id"], "ml-club");
    assert_eq!(json["date"], "2026-02-05");
    assert_eq!(json["mode"], "Online");
}

#[test]
fn schema_rejects_unknown_category() {
    let schema = serde_json::to_value(schema_for!(Club)).unwrap();
    let mut instance = serde_json::to_value(&Catalog::sample().clubs()[0]).unwrap();
    instance["category"] = serde_json::json!("robotics");
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
