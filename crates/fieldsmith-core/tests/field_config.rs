use fieldsmith_core::{
    Error, FieldConfig, FieldConfigSet, FieldPatch, FieldSettings, FieldType, GenerationStrategy,
    LookupSource,
};
use serde_json::json;

#[test]
fn setting_csv_column_clears_manual_values() {
    let mut settings = FieldSettings::default();
    settings.set_lookup_values(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(settings.lookup_values().map(<[String]>::len), Some(2));

    settings.set_csv_column("city");
    assert!(settings.lookup_values().is_none());
    assert_eq!(settings.csv_column(), Some("city"));
}

#[test]
fn setting_manual_values_clears_csv_source() {
    let mut settings = FieldSettings::default();
    settings.set_csv_source(
        vec![vec!["city".to_string()], vec!["Recife".to_string()]],
        "city",
    );
    settings.set_lookup_values(vec!["Natal".to_string()]);

    assert!(settings.csv_column().is_none());
    assert!(settings.csv_data().is_none());
    assert_eq!(
        settings.lookup,
        Some(LookupSource::Manual {
            values: vec!["Natal".to_string()]
        })
    );
}

#[test]
fn csv_column_change_keeps_uploaded_rows() {
    let mut settings = FieldSettings::default();
    let grid = vec![
        vec!["city".to_string(), "state".to_string()],
        vec!["Recife".to_string(), "PE".to_string()],
    ];
    settings.set_csv_source(grid.clone(), "city");
    settings.set_csv_column("state");

    assert_eq!(settings.csv_data(), Some(grid.as_slice()));
    assert_eq!(settings.csv_column(), Some("state"));
}

#[test]
fn patch_replaces_only_named_keys() {
    let mut set = FieldConfigSet::new();
    let mut field = FieldConfig::new("age", FieldType::Number, GenerationStrategy::Range);
    field.config.range_min = Some(18);
    field.config.range_max = Some(65);
    field.max_field_length = Some(3);
    let id = set.add(field);

    let patched = set
        .patch(
            &id,
            FieldPatch {
                required: Some(true),
                ..FieldPatch::default()
            },
        )
        .expect("patch field");

    assert!(patched.required);
    assert_eq!(patched.name, "age");
    assert_eq!(patched.max_field_length, Some(3));
    assert_eq!(patched.config.range_min, Some(18));
    assert_eq!(patched.config.range_max, Some(65));
}

#[test]
fn patch_can_clear_max_field_length_and_replace_config() {
    let mut field = FieldConfig::new("code", FieldType::String, GenerationStrategy::Static);
    field.max_field_length = Some(4);
    field.config.static_value = Some("ABCD".to_string());

    field.apply(FieldPatch {
        max_field_length: Some(None),
        config: Some(FieldSettings::default()),
        ..FieldPatch::default()
    });

    assert_eq!(field.max_field_length, None);
    assert_eq!(field.config, FieldSettings::default());
}

#[test]
fn patch_and_remove_report_unknown_ids() {
    let mut set = FieldConfigSet::from(vec![FieldConfig::new(
        "name",
        FieldType::String,
        GenerationStrategy::Minmax,
    )]);

    assert!(matches!(
        set.patch("missing", FieldPatch::default()),
        Err(Error::UnknownField(_))
    ));
    assert!(matches!(set.remove("missing"), Err(Error::UnknownField(_))));
    assert_eq!(set.len(), 1);
}

#[test]
fn remove_preserves_declaration_order() {
    let mut set = FieldConfigSet::new();
    let first = set.add(FieldConfig::new("a", FieldType::String, GenerationStrategy::Static));
    let second = set.add(FieldConfig::new("b", FieldType::String, GenerationStrategy::Static));
    set.add(FieldConfig::new("c", FieldType::String, GenerationStrategy::Static));

    let removed = set.remove(&second).expect("remove field");
    assert_eq!(removed.name, "b");

    let names: Vec<&str> = set.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
    assert!(set.get(&first).is_some());
}

#[test]
fn field_config_uses_camel_case_wire_names() {
    let mut field = FieldConfig::new("email", FieldType::Email, GenerationStrategy::Pattern);
    field.id = "f1".to_string();
    field.required = true;
    field.max_field_length = Some(40);
    field.config.pattern = Some("{random}@acme.com".to_string());

    let value = serde_json::to_value(&field).expect("serialize field");
    assert_eq!(
        value,
        json!({
            "id": "f1",
            "name": "email",
            "type": "email",
            "dataType": "pattern",
            "required": true,
            "maxFieldLength": 40,
            "generateNegativeTests": false,
            "config": { "pattern": "{random}@acme.com" }
        })
    );
}

#[test]
fn unknown_strategy_deserializes_to_fallback_variant() {
    let field: FieldConfig = serde_json::from_value(json!({
        "id": "f1",
        "name": "token",
        "type": "string",
        "dataType": "fancy"
    }))
    .expect("parse field");

    assert_eq!(field.data_type, GenerationStrategy::Unknown);
    assert!(!field.required);
    assert_eq!(field.config, FieldSettings::default());
}
