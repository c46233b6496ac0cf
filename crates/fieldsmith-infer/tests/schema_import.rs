use serde_json::json;

use fieldsmith_core::{FieldType, GenerationStrategy};
use fieldsmith_infer::{InferError, import_json_schema};

#[test]
fn maps_properties_in_declaration_order() {
    let schema = json!({
        "type": "object",
        "required": ["email", "age"],
        "properties": {
            "email": { "type": "string", "format": "email" },
            "age": { "type": "integer", "minimum": 18, "exclusiveMaximum": 120 },
            "nickname": { "type": "string", "minLength": 2, "maxLength": 12 },
            "plan": { "type": "string", "enum": ["free", "pro", null] },
            "active": { "type": "boolean" },
            "born": { "type": ["string", "null"], "format": "date" },
            "mobile": { "type": "string", "format": "tel" },
            "source": { "const": "web" }
        }
    });

    let fields = import_json_schema(&schema.to_string()).expect("import schema");
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["email", "age", "nickname", "plan", "active", "born", "mobile", "source"]
    );

    assert_eq!(fields[0].field_type, FieldType::Email);
    assert!(fields[0].required);

    assert_eq!(fields[1].data_type, GenerationStrategy::Range);
    assert_eq!(fields[1].config.range_min, Some(18));
    assert_eq!(fields[1].config.range_max, Some(119));
    assert!(fields[1].required);

    assert_eq!(fields[2].config.min_length, Some(2));
    assert_eq!(fields[2].config.max_length, Some(12));
    assert_eq!(fields[2].max_field_length, Some(12));
    assert!(!fields[2].required);

    assert_eq!(fields[3].data_type, GenerationStrategy::Lookup);
    assert_eq!(
        fields[3].config.lookup_values(),
        Some(&["free".to_string(), "pro".to_string()][..])
    );

    assert_eq!(fields[4].field_type, FieldType::Boolean);
    assert_eq!(fields[5].field_type, FieldType::Date);
    assert_eq!(fields[6].field_type, FieldType::Phone);
    assert_eq!(fields[7].data_type, GenerationStrategy::Static);
    assert_eq!(fields[7].config.static_value.as_deref(), Some("web"));
}

#[test]
fn non_object_schemas_are_rejected() {
    assert!(matches!(
        import_json_schema(r#"{"type": "array", "items": {}}"#),
        Err(InferError::InvalidSchema(_))
    ));
    assert!(matches!(
        import_json_schema(r#"{"type": "object"}"#),
        Err(InferError::InvalidSchema(_))
    ));
    assert!(matches!(import_json_schema("[]"), Err(InferError::InvalidSchema(_))));
    assert!(matches!(import_json_schema("{"), Err(InferError::Json(_))));
}
