use fieldsmith_core::{
    FieldConfig, FieldType, FieldsDocument, GenerationStrategy, validate_fields,
    validate_fields_json,
};
use serde_json::json;

#[test]
fn accepts_serialized_document() {
    let mut field = FieldConfig::new("city", FieldType::String, GenerationStrategy::Lookup);
    field.config.set_lookup_values(vec!["Recife".to_string()]);
    let document = FieldsDocument::new(vec![field]);
    let value = serde_json::to_value(&document).expect("serialize document");

    let report = validate_fields_json(&value).expect("validate document");
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
}

#[test]
fn reports_schema_violations_with_paths() {
    let value = json!({
        "version": "0.1",
        "fields": [
            { "id": "f1", "name": "age", "type": "integer", "dataType": "range" }
        ]
    });

    let report = validate_fields_json(&value).expect("validate document");
    assert!(!report.is_ok());
    assert!(
        report
            .errors
            .iter()
            .any(|issue| issue.path.starts_with("/fields/0"))
    );
}

#[test]
fn warns_about_ignored_and_duplicate_fields() {
    let fields = vec![
        FieldConfig::new("", FieldType::String, GenerationStrategy::Static),
        FieldConfig::new("name", FieldType::String, GenerationStrategy::Static),
        FieldConfig::new("name", FieldType::String, GenerationStrategy::Static),
    ];

    let report = validate_fields(&fields);
    assert!(report.is_ok());
    let codes: Vec<&str> = report
        .warnings
        .iter()
        .map(|issue| issue.code.as_str())
        .collect();
    assert_eq!(codes, vec!["empty_name", "duplicate_name"]);
}

#[test]
fn warns_when_csv_column_is_not_in_header() {
    let mut field = FieldConfig::new("city", FieldType::String, GenerationStrategy::Lookup);
    field
        .config
        .set_csv_source(vec![vec!["town".to_string()]], "city");

    let report = validate_fields(&[field]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].code, "lookup_column_missing");
}

#[test]
fn unknown_strategy_passes_schema_and_is_warned() {
    let value = json!({
        "version": "0.1",
        "fields": [
            { "id": "f1", "name": "x", "type": "string", "dataType": "regex" }
        ]
    });

    let report = validate_fields_json(&value).expect("validate document");
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);

    let document: FieldsDocument = serde_json::from_value(value).expect("parse document");
    assert_eq!(document.fields[0].data_type, GenerationStrategy::Unknown);
    let semantic = validate_fields(&document.fields);
    assert!(
        semantic
            .warnings
            .iter()
            .any(|issue| issue.code == "unknown_strategy")
    );
}

#[test]
fn metadata_key_names_are_rejected() {
    let fields = vec![
        FieldConfig::new("_testType", FieldType::String, GenerationStrategy::Static),
        FieldConfig::new("city", FieldType::String, GenerationStrategy::Static),
    ];

    let report = validate_fields(&fields);
    assert!(!report.is_ok());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, "reserved_name");
    assert_eq!(report.errors[0].path, "/fields/0/name");
    assert!(!fields[0].is_generated());
    assert!(fields[1].is_generated());
}
