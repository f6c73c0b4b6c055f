use serde_json::json;

use super::*;

// =============================================================
// FieldConfig defaults
// =============================================================

#[test]
fn field_config_default_has_no_options() {
    let config = FieldConfig::default();
    assert!(config.name.is_none());
    assert!(config.label.is_none());
    assert!(config.placeholder.is_none());
    assert!(config.allows_duplication());
}

#[test]
fn default_fields_is_single_unlabeled_column() {
    assert_eq!(default_fields(), vec![FieldConfig::default()]);
}

#[test]
fn normalize_fields_replaces_empty_list() {
    assert_eq!(normalize_fields(Vec::new()).len(), 1);
}

#[test]
fn normalize_fields_keeps_non_empty_list() {
    let fields = vec![FieldConfig::named("a"), FieldConfig::named("b")];
    assert_eq!(normalize_fields(fields.clone()), fields);
}

// =============================================================
// Naming
// =============================================================

#[test]
fn field_name_uses_one_based_row_suffix() {
    let config = FieldConfig::named("age");
    assert_eq!(config.field_name(0), "age1");
    assert_eq!(config.field_name(1), "age2");
    assert_eq!(config.field_name(9), "age10");
}

#[test]
fn field_name_is_empty_without_name() {
    assert_eq!(FieldConfig::default().field_name(0), "");
    assert_eq!(FieldConfig::default().field_name(3), "");
}

#[test]
fn label_and_placeholder_text_default_to_empty() {
    let config = FieldConfig::default();
    assert_eq!(config.label_text(), "");
    assert_eq!(config.placeholder_text(), "");

    let config = FieldConfig::default().with_label("Label 1").with_placeholder("Placeholder 1");
    assert_eq!(config.label_text(), "Label 1");
    assert_eq!(config.placeholder_text(), "Placeholder 1");
}

#[test]
fn without_duplication_disables_append() {
    assert!(!FieldConfig::default().without_duplication().allows_duplication());
}

// =============================================================
// Serde shape
// =============================================================

#[test]
fn field_config_deserializes_camel_case() {
    let config: FieldConfig = serde_json::from_value(json!({
        "name": "address",
        "label": "Address",
        "placeholder": "Street",
        "disableDuplication": true
    }))
    .unwrap();
    assert_eq!(config.name.as_deref(), Some("address"));
    assert_eq!(config.label.as_deref(), Some("Address"));
    assert_eq!(config.placeholder.as_deref(), Some("Street"));
    assert!(config.disable_duplication);
}

#[test]
fn field_config_deserializes_empty_object() {
    let config: FieldConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config, FieldConfig::default());
}

#[test]
fn field_config_serializes_without_unset_options() {
    let value = serde_json::to_value(FieldConfig::named("age")).unwrap();
    assert_eq!(value, json!({ "name": "age", "disableDuplication": false }));
}
